use crate::domain::model::{CurriculumPlan, ProgressRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// One round trip to the generative service. Each call site fixes its own
/// temperature and output budget.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// External generative service. Implementations map transport, auth and
/// quota problems into `TutorError::ExternalCall`.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}

/// Durable storage collaborator. Owns identity assignment; the core only
/// hands over materialized values and reads ordered records back.
#[async_trait]
pub trait PlanStore: Send + Sync {
    async fn save_curriculum(&self, student_id: i64, plan: &CurriculumPlan) -> Result<i64>;

    async fn save_progress(&self, student_id: i64, record: &ProgressRecord) -> Result<i64>;

    /// Records for one student in logging order.
    async fn progress_for(&self, student_id: i64) -> Result<Vec<ProgressRecord>>;
}
