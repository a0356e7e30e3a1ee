//! AWS identity configuration from TOML (`[aws]` and `[cognito]` sections)

use crate::providers::cognito::CognitoSettings;
use advisor_domain::{ConfigIssue, Login};
use serde::{Deserialize, Serialize};

/// Region and Cognito pool identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAwsConfig {
    /// AWS region of the user pool, identity pool and Bedrock (`AWS_REGION`)
    pub region: Option<String>,
    /// Cognito identity pool id (`AWS_IDENTITY_POOL_ID`)
    pub identity_pool_id: Option<String>,
    /// Cognito user pool id (`AWS_USER_POOL_ID`)
    pub user_pool_id: Option<String>,
    /// User pool app client id (`AWS_APP_CLIENT_ID`)
    pub app_client_id: Option<String>,
}

/// The fixed service login used for password authentication.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCognitoConfig {
    /// `COGNITO_USERNAME`
    pub username: Option<String>,
    /// `COGNITO_PASSWORD`
    pub password: Option<String>,
    /// Override for the Cognito endpoints (local mocks).
    pub endpoint_url: Option<String>,
}

impl std::fmt::Debug for FileCognitoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileCognitoConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

impl FileAwsConfig {
    pub(crate) fn missing_settings(&self) -> Vec<ConfigIssue> {
        [
            (&self.region, "aws.region", "AWS_REGION"),
            (&self.identity_pool_id, "aws.identity_pool_id", "AWS_IDENTITY_POOL_ID"),
            (&self.user_pool_id, "aws.user_pool_id", "AWS_USER_POOL_ID"),
            (&self.app_client_id, "aws.app_client_id", "AWS_APP_CLIENT_ID"),
        ]
        .into_iter()
        .filter(|(value, _, _)| is_blank(value))
        .map(|(_, field, env)| ConfigIssue::missing(field, env))
        .collect()
    }
}

impl FileCognitoConfig {
    pub(crate) fn missing_settings(&self) -> Vec<ConfigIssue> {
        [
            (&self.username, "cognito.username", "COGNITO_USERNAME"),
            (&self.password, "cognito.password", "COGNITO_PASSWORD"),
        ]
        .into_iter()
        .filter(|(value, _, _)| is_blank(value))
        .map(|(_, field, env)| ConfigIssue::missing(field, env))
        .collect()
    }

    /// The configured login; absent fields become empty strings.
    pub fn login(&self) -> Login {
        Login::new(
            self.username.clone().unwrap_or_default(),
            self.password.clone().unwrap_or_default(),
        )
    }

    pub fn settings(&self, aws: &FileAwsConfig) -> CognitoSettings {
        CognitoSettings {
            region: aws.region.clone(),
            user_pool_id: aws.user_pool_id.clone(),
            app_client_id: aws.app_client_id.clone(),
            identity_pool_id: aws.identity_pool_id.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}
