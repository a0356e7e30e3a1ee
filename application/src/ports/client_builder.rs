//! Client builder port
//!
//! Builds an LLM client for a [`ClientSpec`] from a set of credentials.
//! Adapters classify failures at the SDK boundary so the application layer
//! branches on a variant instead of inspecting error codes.

use advisor_domain::{ClientSpec, Credentials};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientBuildError {
    /// The credentials' security token has expired. Recoverable by
    /// fetching fresh credentials.
    #[error("Security token expired: {0}")]
    ExpiredToken(String),

    /// Any other construction failure (configuration, network, quota).
    #[error("{0}")]
    Failed(String),
}

impl ClientBuildError {
    pub fn is_expired_token(&self) -> bool {
        matches!(self, ClientBuildError::ExpiredToken(_))
    }
}

#[async_trait]
pub trait ClientBuilder: Send + Sync {
    type Client: Send + Sync + 'static;

    async fn build(
        &self,
        spec: &ClientSpec,
        credentials: &Credentials,
    ) -> Result<Self::Client, ClientBuildError>;
}
