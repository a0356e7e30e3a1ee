//! Credential broker port
//!
//! Exchanges the fixed login for short-lived federated cloud credentials.

use advisor_domain::Credentials;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from the two-step credential exchange.
///
/// Every variant is terminal: the caller surfaces it and never retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// The user pool looked at the login and refused it.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The password authentication step could not run: missing settings,
    /// an unreachable endpoint, throttling or a service fault.
    #[error("Authentication unavailable: {0}")]
    Unavailable(String),

    /// The identity exchange or credential issuance step failed.
    #[error("Credential federation failed: {0}")]
    Federation(String),
}

/// Identity broker that issues temporary credentials.
///
/// Each call performs the full exchange from scratch and keeps no state
/// between calls; callers cache the result.
#[async_trait]
pub trait CredentialBroker: Send + Sync {
    async fn obtain_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Credentials, CredentialError>;
}
