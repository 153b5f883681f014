//! Error types for the condense CLI.
//!
//! This module defines a unified error enum that covers all error categories
//! in the application: configuration, I/O, generation, extraction, and
//! prompt errors.

use thiserror::Error;

/// Unified error type for the condense CLI.
///
/// All fallible functions in the application return `Result<T, AppError>`.
/// We never panic; errors must be represented and propagated.
///
/// Note that an *empty* model output is not an error anywhere in this
/// codebase; it is a valid value handled by the generation retry policy.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// LLM provider and transport errors
    #[error("LLM error: {0}")]
    Llm(String),

    /// Document text extraction errors
    #[error("Extraction error: {0}")]
    Extract(String),

    /// Prompt rendering errors
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
