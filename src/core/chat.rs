use crate::core::prompt;
use crate::domain::ports::{ChatMessage, CompletionRequest, GenerativeClient};

pub const CHAT_TEMPERATURE: f32 = 0.7;
pub const CHAT_MAX_TOKENS: u32 = 500;

/// Tutoring chat. This path never fails outward: a failed call degrades to
/// an apology string carrying the raw error text, indistinguishable by type
/// from a genuine reply.
pub struct ChatAssistant<G: GenerativeClient> {
    client: G,
    model: String,
}

impl<G: GenerativeClient> ChatAssistant<G> {
    pub fn new(client: G, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub async fn reply(&self, message: &str, context: &serde_json::Value) -> String {
        let prompt_text = prompt::chat_prompt(message, context);

        let result = self
            .client
            .complete(CompletionRequest {
                model: self.model.clone(),
                messages: vec![
                    ChatMessage::system(prompt::CHAT_SYSTEM_PROMPT),
                    ChatMessage::user(prompt_text),
                ],
                temperature: CHAT_TEMPERATURE,
                max_tokens: CHAT_MAX_TOKENS,
            })
            .await;

        match result {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Chat completion failed, returning degraded reply: {}", e);
                format!(
                    "I'm having trouble responding right now. Please try again later. Error: {}",
                    e
                )
            }
        }
    }
}
