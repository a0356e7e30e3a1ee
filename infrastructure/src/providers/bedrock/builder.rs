//! Bedrock client builder
//!
//! Implements [`ClientBuilder`]: turns federated credentials and a
//! [`ClientSpec`] into a [`BedrockChatClient`].

use super::client::{BedrockChatClient, InferenceSettings};
use advisor_application::ports::client_builder::{ClientBuildError, ClientBuilder};
use advisor_domain::{ClientSpec, Credentials};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::config::{BehaviorVersion, Credentials as SdkCredentials, Region};
use chrono::Utc;
use std::time::SystemTime;
use tracing::debug;

/// Credentials this close to expiry are treated as already expired.
pub const DEFAULT_EXPIRY_SKEW: chrono::Duration = chrono::Duration::seconds(60);

/// Region and generation parameters for Bedrock clients.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BedrockSettings {
    pub region: Option<String>,
    pub inference: InferenceSettings,
    /// Override for the Bedrock runtime endpoint.
    pub endpoint_url: Option<String>,
}

pub struct BedrockClientBuilder {
    settings: BedrockSettings,
    expiry_skew: chrono::Duration,
}

impl BedrockClientBuilder {
    pub fn new(settings: BedrockSettings) -> Self {
        Self {
            settings,
            expiry_skew: DEFAULT_EXPIRY_SKEW,
        }
    }

    pub fn with_expiry_skew(mut self, skew: chrono::Duration) -> Self {
        self.expiry_skew = skew;
        self
    }

    pub fn settings(&self) -> &BedrockSettings {
        &self.settings
    }
}

#[async_trait]
impl ClientBuilder for BedrockClientBuilder {
    type Client = BedrockChatClient;

    async fn build(
        &self,
        spec: &ClientSpec,
        credentials: &Credentials,
    ) -> Result<BedrockChatClient, ClientBuildError> {
        if credentials.expires_within(Utc::now(), self.expiry_skew) {
            return Err(ClientBuildError::ExpiredToken(format!(
                "credentials {} expired at {}",
                credentials.access_key_id(),
                credentials.expiration()
            )));
        }

        let region = self
            .settings
            .region
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .ok_or_else(|| ClientBuildError::Failed("AWS region is not configured".to_string()))?;

        let sdk_credentials = SdkCredentials::new(
            credentials.access_key_id(),
            credentials.secret_key(),
            Some(credentials.session_token().to_string()),
            Some(SystemTime::from(credentials.expiration())),
            "cognito-identity",
        );

        let mut config = aws_sdk_bedrockruntime::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .credentials_provider(sdk_credentials);
        if let Some(ref endpoint_url) = self.settings.endpoint_url {
            config = config.endpoint_url(endpoint_url);
        }

        debug!(spec = %spec, region, "Building Bedrock runtime client");
        let client = aws_sdk_bedrockruntime::Client::from_conf(config.build());

        Ok(BedrockChatClient::new(
            client,
            spec.clone(),
            self.settings.inference,
        ))
    }
}
