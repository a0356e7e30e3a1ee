//! Infrastructure layer for course-advisor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: Cognito credential federation, Bedrock
//! clients, configuration loading, transcripts and the system prompt.

pub mod config;
pub mod logging;
pub mod prompt;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use logging::JsonlConversationLogger;
pub use prompt::{PromptLoadError, PromptLoader};
pub use providers::bedrock::{BedrockChatClient, BedrockClientBuilder, BedrockSettings};
pub use providers::cognito::{CognitoCredentialProvider, CognitoSettings};
