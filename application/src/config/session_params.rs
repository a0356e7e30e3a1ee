//! Session parameters: cache lifetimes for credentials and clients.
//!
//! Federated credentials are issued for one hour; caching them for 45
//! minutes leaves a margin before the broker-side expiry. Clients share the
//! same lifetime because they embed the credentials they were built from.

use std::time::Duration;

/// Default time-to-live for cached credentials and clients (45 minutes).
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(45 * 60);

/// Cache lifetimes used by the client factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionParams {
    /// How long obtained credentials are reused.
    pub credentials_ttl: Duration,
    /// How long built clients are reused per (model, temperature).
    pub client_ttl: Duration,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            credentials_ttl: DEFAULT_SESSION_TTL,
            client_ttl: DEFAULT_SESSION_TTL,
        }
    }
}

impl SessionParams {
    // ==================== Builder Methods ====================

    pub fn with_credentials_ttl(mut self, ttl: Duration) -> Self {
        self.credentials_ttl = ttl;
        self
    }

    pub fn with_client_ttl(mut self, ttl: Duration) -> Self {
        self.client_ttl = ttl;
        self
    }
}
