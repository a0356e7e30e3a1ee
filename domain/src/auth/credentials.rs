//! Temporary federated credentials (Value Object)

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Short-lived access key / secret / session token triple issued by the
/// identity broker.
///
/// Immutable once issued and compared by value. `Debug` redacts the secret
/// key and session token so credentials can appear in tracing fields.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    access_key_id: String,
    secret_key: String,
    session_token: String,
    expiration: DateTime<Utc>,
}

impl Credentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_key: impl Into<String>,
        session_token: impl Into<String>,
        expiration: DateTime<Utc>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_key: secret_key.into(),
            session_token: session_token.into(),
            expiration,
        }
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn session_token(&self) -> &str {
        &self.session_token
    }

    pub fn expiration(&self) -> DateTime<Utc> {
        self.expiration
    }

    /// True when the credentials are expired at `now`, or will be within `skew`.
    pub fn expires_within(&self, now: DateTime<Utc>, skew: Duration) -> bool {
        self.expiration <= now + skew
    }

    /// Time left before expiry at `now` (zero once expired)
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.expiration - now).max(Duration::zero())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_key", &"<redacted>")
            .field("session_token", &"<redacted>")
            .field("expiration", &self.expiration)
            .finish()
    }
}
