use thiserror::Error;

#[derive(Error, Debug)]
pub enum TutorError {
    #[error("Generative API call failed: {message}")]
    ExternalCall { message: String },

    #[error("No usable payload in model response: {message}")]
    Extraction { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl TutorError {
    pub fn external_call(message: impl Into<String>) -> Self {
        TutorError::ExternalCall {
            message: message.into(),
        }
    }

    pub fn extraction(message: impl Into<String>) -> Self {
        TutorError::Extraction {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TutorError>;
