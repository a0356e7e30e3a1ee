//! Chat model port
//!
//! Defines the interface the advisor uses to send a conversation to an LLM.

use advisor_domain::{ClientSpec, Conversation};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while talking to the LLM service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The service rejected the client's security token as expired.
    #[error("Security token expired: {0}")]
    ExpiredToken(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Throttled: {0}")]
    Throttled(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,
}

/// A configured handle to the remote LLM service
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// The model and temperature this client was built for
    fn spec(&self) -> &ClientSpec;

    /// Send the whole conversation and return the model's reply text
    async fn converse(
        &self,
        system_prompt: &str,
        conversation: &Conversation,
    ) -> Result<String, GatewayError>;
}
