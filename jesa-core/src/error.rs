//! Error types for the jesa crates.

use thiserror::Error;

/// Errors that can occur in jesa operations.
#[derive(Error, Debug)]
pub enum JesaError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Memorial not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for jesa operations.
pub type JesaResult<T> = Result<T, JesaError>;
