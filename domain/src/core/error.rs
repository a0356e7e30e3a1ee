//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid temperature: {0} (expected a value between 0.0 and 1.0)")]
    InvalidTemperature(String),

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Invalid answer style: {0}")]
    InvalidAnswerStyle(String),

    #[error("Conversation has no user message")]
    NoUserMessage,
}
