use crate::core::extract::{extract, Extraction};
use crate::core::prompt;
use crate::domain::model::PracticeQuestion;
use crate::domain::ports::{ChatMessage, CompletionRequest, GenerativeClient};
use crate::utils::error::{Result, TutorError};

pub const PRACTICE_TEMPERATURE: f32 = 0.5;
pub const PRACTICE_MAX_TOKENS: u32 = 500;

/// Practice-question generation. Unlike the curriculum path there is no
/// fallback: a failed call or a response without a parseable question both
/// surface to the caller.
pub struct PracticeQuestionGenerator<G: GenerativeClient> {
    client: G,
    model: String,
}

impl<G: GenerativeClient> PracticeQuestionGenerator<G> {
    pub fn new(client: G, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub async fn generate(&self, topic: &str, difficulty: &str) -> Result<PracticeQuestion> {
        let prompt_text = prompt::practice_question_prompt(topic, difficulty);

        tracing::debug!("Requesting {} practice question on {}", difficulty, topic);
        let raw = self
            .client
            .complete(CompletionRequest {
                model: self.model.clone(),
                messages: vec![
                    ChatMessage::system(prompt::PRACTICE_SYSTEM_PROMPT),
                    ChatMessage::user(prompt_text),
                ],
                temperature: PRACTICE_TEMPERATURE,
                max_tokens: PRACTICE_MAX_TOKENS,
            })
            .await?;

        match extract::<PracticeQuestion>(&raw) {
            Extraction::Extracted(question) => Ok(question),
            Extraction::Failed { reason } => Err(TutorError::extraction(reason)),
        }
    }
}
