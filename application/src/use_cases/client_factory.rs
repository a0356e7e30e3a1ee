//! Resilient client factory.
//!
//! Builds LLM clients from cached federated credentials and recovers from a
//! stale cached token exactly once.
//!
//! ```text
//! START ─▶ CREDENTIALS_READY ─▶ CLIENT_BUILT
//!                  │
//!                  └─ expired ─▶ invalidate ─▶ CREDENTIALS_READY(2) ─▶ CLIENT_BUILT
//!                                                       │
//!                                                       └─ any failure ─▶ FATAL
//! ```
//!
//! Only [`ClientBuildError::ExpiredToken`] on the first attempt is retried.
//! Every other failure, and a second expired token, is surfaced as
//! [`ClientFactoryError::Construction`].

use crate::cache::SessionCache;
use crate::config::SessionParams;
use crate::ports::client_builder::{ClientBuildError, ClientBuilder};
use crate::ports::credential_broker::{CredentialBroker, CredentialError};
use advisor_domain::{ClientSpec, Credentials, Login, Model, Temperature};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced by [`ResilientClientFactory::get_client`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientFactoryError {
    #[error(transparent)]
    Credentials(#[from] CredentialError),

    #[error("Failed to build client for {spec} after {attempts} attempt(s): {reason}")]
    Construction {
        spec: String,
        reason: String,
        attempts: u8,
    },
}

impl ClientFactoryError {
    fn construction(spec: &ClientSpec, error: ClientBuildError, attempts: u8) -> Self {
        ClientFactoryError::Construction {
            spec: spec.to_string(),
            reason: error.to_string(),
            attempts,
        }
    }
}

/// Owns the credential and client caches for the whole process.
///
/// Construct one per process and share it behind an `Arc`; every chat
/// session then reuses the same credentials and clients until their ttl
/// elapses.
pub struct ResilientClientFactory<B: ClientBuilder> {
    broker: Arc<dyn CredentialBroker>,
    builder: B,
    login: Login,
    params: SessionParams,
    // Single slot: credentials take no arguments
    credentials: SessionCache<(), Credentials>,
    clients: SessionCache<ClientSpec, Arc<B::Client>>,
}

impl<B: ClientBuilder> ResilientClientFactory<B> {
    pub fn new(broker: Arc<dyn CredentialBroker>, builder: B, login: Login) -> Self {
        Self {
            broker,
            builder,
            login,
            params: SessionParams::default(),
            credentials: SessionCache::new(),
            clients: SessionCache::new(),
        }
    }

    pub fn with_params(mut self, params: SessionParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> SessionParams {
        self.params
    }

    #[cfg(test)]
    pub(crate) fn builder(&self) -> &B {
        &self.builder
    }

    /// Fetch credentials through the cache, running the broker exchange on a miss.
    ///
    /// Callable on its own to pre-warm the cache before the first chat turn.
    pub async fn obtain_credentials(&self) -> Result<Credentials, CredentialError> {
        self.credentials
            .get_or_compute(&(), self.params.credentials_ttl, || async {
                debug!(username = %self.login.username, "Obtaining federated credentials");
                let credentials = self
                    .broker
                    .obtain_credentials(&self.login.username, &self.login.password)
                    .await?;
                info!(
                    access_key_id = %credentials.access_key_id(),
                    expiration = %credentials.expiration(),
                    "Federated credentials obtained"
                );
                Ok(credentials)
            })
            .await
    }

    /// Get a cached client for `(model, temperature)`, building it on a miss.
    pub async fn get_client(
        &self,
        model: &Model,
        temperature: Temperature,
    ) -> Result<Arc<B::Client>, ClientFactoryError> {
        self.get_client_for(&ClientSpec::new(model.clone(), temperature))
            .await
    }

    /// Same as [`get_client`](Self::get_client), keyed by a [`ClientSpec`].
    pub async fn get_client_for(
        &self,
        spec: &ClientSpec,
    ) -> Result<Arc<B::Client>, ClientFactoryError> {
        self.clients
            .get_or_compute(spec, self.params.client_ttl, || async {
                let client = self.build_with_refresh(spec).await?;
                info!(spec = %spec, "LLM client ready");
                Ok(Arc::new(client))
            })
            .await
    }

    /// Drop the cached credentials. Returns `true` if an entry was removed.
    pub fn invalidate_credentials(&self) -> bool {
        self.credentials.invalidate(&())
    }

    /// Drop the cached client for `spec`. Returns `true` if an entry was removed.
    pub fn invalidate_client(&self, spec: &ClientSpec) -> bool {
        self.clients.invalidate(spec)
    }

    async fn build_with_refresh(&self, spec: &ClientSpec) -> Result<B::Client, ClientFactoryError> {
        let credentials = self.obtain_credentials().await?;

        let reason = match self.builder.build(spec, &credentials).await {
            Ok(client) => return Ok(client),
            Err(ClientBuildError::ExpiredToken(reason)) => reason,
            Err(error) => return Err(ClientFactoryError::construction(spec, error, 1)),
        };

        warn!(
            spec = %spec,
            reason = %reason,
            "Cached credentials rejected as expired, refreshing once"
        );
        self.invalidate_credentials();
        let credentials = self.obtain_credentials().await?;

        self.builder
            .build(spec, &credentials)
            .await
            .map_err(|error| ClientFactoryError::construction(spec, error, 2))
    }
}
