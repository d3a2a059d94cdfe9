pub mod analytics;
pub mod chat;
pub mod curriculum;
pub mod engine;
pub mod extract;
pub mod fallback;
pub mod practice;
pub mod prompt;

pub use crate::domain::model::{
    CurriculumPlan, ProgressAnalytics, ProgressRecord, StudentProfile,
};
pub use crate::domain::ports::{GenerativeClient, PlanStore};
pub use crate::utils::error::Result;
