pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{MemoryStore, OpenAiClient};
pub use config::EngineConfig;
pub use core::engine::TutorEngine;
pub use domain::model::{CurriculumPlan, ProgressAnalytics, ProgressRecord, StudentProfile};
pub use utils::error::{Result, TutorError};
