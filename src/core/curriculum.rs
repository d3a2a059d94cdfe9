use crate::core::extract::{extract, Extraction};
use crate::core::{fallback, prompt};
use crate::domain::model::{CurriculumPlan, StudentMetadata, StudentProfile};
use crate::domain::ports::{ChatMessage, CompletionRequest, GenerativeClient};
use crate::utils::error::Result;

pub const CURRICULUM_TEMPERATURE: f32 = 0.7;
pub const CURRICULUM_MAX_TOKENS: u32 = 2000;

/// Curriculum generation: prompt -> one external call -> extraction ->
/// fallback synthesis when extraction fails. A failed call surfaces; a
/// failed extraction never does.
pub struct CurriculumPipeline<G: GenerativeClient> {
    client: G,
    model: String,
}

impl<G: GenerativeClient> CurriculumPipeline<G> {
    pub fn new(client: G, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub async fn generate(&self, profile: &StudentProfile) -> Result<CurriculumPlan> {
        let prompt_text = prompt::curriculum_prompt(profile);

        tracing::debug!("Requesting curriculum from model {}", self.model);
        let raw = self
            .client
            .complete(CompletionRequest {
                model: self.model.clone(),
                messages: vec![
                    ChatMessage::system(prompt::CURRICULUM_SYSTEM_PROMPT),
                    ChatMessage::user(prompt_text),
                ],
                temperature: CURRICULUM_TEMPERATURE,
                max_tokens: CURRICULUM_MAX_TOKENS,
            })
            .await?;

        let plan = match extract::<CurriculumPlan>(&raw) {
            Extraction::Extracted(mut plan) => {
                plan.student_metadata = Some(StudentMetadata {
                    grade_level: profile.grade_level,
                    learning_style: profile.learning_style,
                    weak_subjects: profile.weak_subjects.clone(),
                });
                tracing::debug!(
                    "Extracted {}-week plan from model response",
                    plan.duration_weeks()
                );
                plan
            }
            Extraction::Failed { reason } => {
                tracing::warn!(
                    "No usable curriculum in model response ({}), synthesizing fallback plan",
                    reason
                );
                fallback::fallback_curriculum(profile)
            }
        };

        Ok(plan)
    }
}
