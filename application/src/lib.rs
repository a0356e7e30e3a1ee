//! Application layer for course-advisor
//!
//! This crate contains use cases, port definitions, the session cache and
//! application configuration. It depends only on the domain layer.

pub mod cache;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use cache::SessionCache;
pub use config::{DEFAULT_SESSION_TTL, SessionParams};
pub use ports::{
    chat_model::{ChatModel, GatewayError},
    client_builder::{ClientBuildError, ClientBuilder},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    credential_broker::{CredentialBroker, CredentialError},
};
pub use use_cases::ask_advisor::{
    AskAdvisorError, AskAdvisorInput, AskAdvisorOutput, AskAdvisorUseCase,
};
pub use use_cases::client_factory::{ClientFactoryError, ResilientClientFactory};
