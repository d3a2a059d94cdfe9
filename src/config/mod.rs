#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use file::{ApiConfig, EngineConfig};
