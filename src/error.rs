//! Error handling for the skillfy analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillfyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unreadable document '{path}': {reason}")]
    UnreadableDocument { path: String, reason: String },

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, SkillfyError>;

impl From<askama::Error> for SkillfyError {
    fn from(err: askama::Error) -> Self {
        SkillfyError::OutputFormatting(err.to_string())
    }
}

impl From<aho_corasick::BuildError> for SkillfyError {
    fn from(err: aho_corasick::BuildError) -> Self {
        SkillfyError::Vocabulary(format!("Failed to build skill matcher: {}", err))
    }
}
