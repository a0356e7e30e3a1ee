//! Domain layer for course-advisor
//!
//! This crate contains the value objects and entities of the advisor.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Credentials**: short-lived federated cloud credentials, obtained with
//!   a fixed [`Login`] and held only inside the session cache
//! - **ClientSpec**: the `(model, temperature)` pair an LLM client is built for
//! - **Conversation**: ordered chat turns owned by the chat surface

pub mod auth;
pub mod config;
pub mod conversation;
pub mod core;
pub mod prompt;

// Re-export commonly used types
pub use auth::{credentials::Credentials, login::Login};
pub use config::{ConfigIssue, ConfigIssueCode, Severity, has_errors};
pub use conversation::{
    answer::{format_thought_duration, strip_final_answer},
    entities::{Conversation, Message, Role},
};
pub use core::{
    client_spec::ClientSpec, error::DomainError, model::Model, temperature::Temperature,
};
pub use prompt::{answer_style::AnswerStyle, template::SystemPromptTemplate};
