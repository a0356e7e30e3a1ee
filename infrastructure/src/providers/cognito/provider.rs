//! Cognito credential provider
//!
//! Implements [`CredentialBroker`] with the two-step Cognito exchange:
//!
//! 1. User pool `InitiateAuth` (`USER_PASSWORD_AUTH`) turns the login into an ID token
//! 2. Identity pool `GetId` + `GetCredentialsForIdentity` trade the ID token
//!    for temporary AWS credentials
//!
//! All three calls are unauthenticated, so the SDK clients carry no
//! credentials of their own.

use super::types;
use crate::providers::error::{describe_sdk_error, service_error_code};
use advisor_application::ports::credential_broker::{CredentialBroker, CredentialError};
use advisor_domain::Credentials;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_cognitoidentityprovider::types::AuthFlowType;
use tracing::{debug, info};

/// `InitiateAuth` error codes for a login the user pool refused.
const LOGIN_REJECTED_CODES: &[&str] = &[
    "NotAuthorizedException",
    "UserNotFoundException",
    "UserNotConfirmedException",
    "PasswordResetRequiredException",
];

/// Identifiers of the user pool, app client and identity pool.
///
/// Every field is optional at load time; the step that needs a missing
/// value fails when it runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CognitoSettings {
    pub region: Option<String>,
    pub user_pool_id: Option<String>,
    pub app_client_id: Option<String>,
    pub identity_pool_id: Option<String>,
    /// Override for both Cognito endpoints (local mocks, private endpoints).
    pub endpoint_url: Option<String>,
}

pub struct CognitoCredentialProvider {
    idp: aws_sdk_cognitoidentityprovider::Client,
    identity: aws_sdk_cognitoidentity::Client,
    settings: CognitoSettings,
}

impl CognitoCredentialProvider {
    /// Create a provider with SDK clients for the configured region.
    pub async fn new(settings: CognitoSettings) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest()).no_credentials();

        if let Some(ref region) = settings.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(ref endpoint_url) = settings.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;
        Self::from_sdk_config(&sdk_config, settings)
    }

    /// Create a provider from an already loaded SDK configuration.
    pub fn from_sdk_config(sdk_config: &SdkConfig, settings: CognitoSettings) -> Self {
        Self {
            idp: aws_sdk_cognitoidentityprovider::Client::new(sdk_config),
            identity: aws_sdk_cognitoidentity::Client::new(sdk_config),
            settings,
        }
    }

    pub fn settings(&self) -> &CognitoSettings {
        &self.settings
    }

    /// Step 1: password authentication against the user pool.
    async fn authenticate(&self, username: &str, password: &str) -> Result<String, CredentialError> {
        let region =
            require(&self.settings.region, "AWS region").map_err(CredentialError::Unavailable)?;
        let client_id = require(&self.settings.app_client_id, "app client id")
            .map_err(CredentialError::Unavailable)?;

        debug!(region, username, "Calling Cognito InitiateAuth");
        let output = self
            .idp
            .initiate_auth()
            .auth_flow(AuthFlowType::UserPasswordAuth)
            .client_id(client_id)
            .auth_parameters("USERNAME", username)
            .auth_parameters("PASSWORD", password)
            .send()
            .await
            .map_err(|e| {
                let reason = describe_sdk_error(&e);
                match service_error_code(&e) {
                    Some(code) if LOGIN_REJECTED_CODES.contains(&code) => {
                        CredentialError::Authentication(reason)
                    }
                    _ => CredentialError::Unavailable(reason),
                }
            })?;

        if let Some(token) = output.authentication_result().and_then(|r| r.id_token()) {
            return Ok(token.to_string());
        }

        let reason = match output.challenge_name() {
            Some(challenge) => format!("login requires the {} challenge", challenge.as_str()),
            None => "InitiateAuth returned no ID token".to_string(),
        };
        Err(CredentialError::Authentication(reason))
    }

    /// Step 2: identity pool federation.
    async fn federate(&self, id_token: &str) -> Result<Credentials, CredentialError> {
        let region =
            require(&self.settings.region, "AWS region").map_err(CredentialError::Federation)?;
        let user_pool_id = require(&self.settings.user_pool_id, "user pool id")
            .map_err(CredentialError::Federation)?;
        let identity_pool_id = require(&self.settings.identity_pool_id, "identity pool id")
            .map_err(CredentialError::Federation)?;

        let login_key = types::login_provider_name(region, user_pool_id);

        let identity_id = self
            .identity
            .get_id()
            .identity_pool_id(identity_pool_id)
            .logins(&login_key, id_token)
            .send()
            .await
            .map_err(|e| CredentialError::Federation(describe_sdk_error(&e)))?
            .identity_id()
            .map(str::to_string)
            .ok_or_else(|| CredentialError::Federation("GetId returned no identity id".into()))?;
        debug!(identity_id = %identity_id, "Resolved Cognito identity");

        let output = self
            .identity
            .get_credentials_for_identity()
            .identity_id(&identity_id)
            .logins(&login_key, id_token)
            .send()
            .await
            .map_err(|e| CredentialError::Federation(describe_sdk_error(&e)))?;

        let credentials = output.credentials().ok_or_else(|| {
            CredentialError::Federation("GetCredentialsForIdentity returned no credentials".into())
        })?;
        types::to_credentials(credentials)
    }
}

#[async_trait]
impl CredentialBroker for CognitoCredentialProvider {
    async fn obtain_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Credentials, CredentialError> {
        let id_token = self.authenticate(username, password).await?;
        info!(username, "Cognito authentication succeeded");

        let credentials = self.federate(&id_token).await?;
        Ok(credentials)
    }
}

fn require<'a>(value: &'a Option<String>, what: &str) -> Result<&'a str, String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| format!("{} is not configured", what))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_config::retry::RetryConfig;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const REGION: &str = "ap-southeast-2";
    const USER_POOL: &str = "ap-southeast-2_Pool01";
    const LOGIN_KEY: &str = "cognito-idp.ap-southeast-2.amazonaws.com/ap-southeast-2_Pool01";

    fn settings() -> CognitoSettings {
        CognitoSettings {
            region: Some(REGION.to_string()),
            user_pool_id: Some(USER_POOL.to_string()),
            app_client_id: Some("client-1".to_string()),
            identity_pool_id: Some("ap-southeast-2:pool-guid".to_string()),
            endpoint_url: None,
        }
    }

    async fn provider(server: &MockServer, settings: CognitoSettings) -> CognitoCredentialProvider {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(REGION))
            .endpoint_url(server.uri())
            .no_credentials()
            .retry_config(RetryConfig::disabled())
            .load()
            .await;
        CognitoCredentialProvider::from_sdk_config(&sdk_config, settings)
    }

    fn amz_json(body: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/x-amz-json-1.1")
    }

    fn amz_error(status: u16, code: &str, message: &str) -> ResponseTemplate {
        ResponseTemplate::new(status)
            .insert_header("x-amzn-errortype", code)
            .set_body_raw(
                json!({ "__type": code, "message": message }).to_string(),
                "application/x-amz-json-1.1",
            )
    }

    async fn mount_initiate_auth(server: &MockServer) {
        Mock::given(method("POST"))
            .and(header(
                "x-amz-target",
                "AWSCognitoIdentityProviderService.InitiateAuth",
            ))
            .and(body_partial_json(json!({
                "AuthFlow": "USER_PASSWORD_AUTH",
                "ClientId": "client-1",
                "AuthParameters": { "USERNAME": "advisor", "PASSWORD": "hunter2" }
            })))
            .respond_with(amz_json(json!({
                "AuthenticationResult": {
                    "IdToken": "id-token-1",
                    "AccessToken": "access-token-1",
                    "ExpiresIn": 3600,
                    "TokenType": "Bearer"
                },
                "ChallengeParameters": {}
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    async fn mount_get_id(server: &MockServer) {
        Mock::given(method("POST"))
            .and(header("x-amz-target", "AWSCognitoIdentityService.GetId"))
            .and(body_partial_json(json!({
                "IdentityPoolId": "ap-southeast-2:pool-guid",
                "Logins": { LOGIN_KEY: "id-token-1" }
            })))
            .respond_with(amz_json(json!({ "IdentityId": "ap-southeast-2:identity-1" })))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_obtain_credentials_full_exchange() {
        let server = MockServer::start().await;
        mount_initiate_auth(&server).await;
        mount_get_id(&server).await;
        Mock::given(method("POST"))
            .and(header(
                "x-amz-target",
                "AWSCognitoIdentityService.GetCredentialsForIdentity",
            ))
            .and(body_partial_json(json!({
                "IdentityId": "ap-southeast-2:identity-1",
                "Logins": { LOGIN_KEY: "id-token-1" }
            })))
            .respond_with(amz_json(json!({
                "IdentityId": "ap-southeast-2:identity-1",
                "Credentials": {
                    "AccessKeyId": "ASIAFEDERATED",
                    "SecretKey": "federated-secret",
                    "SessionToken": "federated-token",
                    "Expiration": 1767225600
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider(&server, settings()).await;
        let credentials = provider
            .obtain_credentials("advisor", "hunter2")
            .await
            .unwrap();

        assert_eq!(credentials.access_key_id(), "ASIAFEDERATED");
        assert_eq!(credentials.secret_key(), "federated-secret");
        assert_eq!(credentials.session_token(), "federated-token");
        assert_eq!(
            credentials.expiration(),
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn test_wrong_password_is_authentication_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header(
                "x-amz-target",
                "AWSCognitoIdentityProviderService.InitiateAuth",
            ))
            .respond_with(amz_error(
                400,
                "NotAuthorizedException",
                "Incorrect username or password.",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider(&server, settings()).await;
        let err = provider
            .obtain_credentials("advisor", "wrong")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CredentialError::Authentication(
                "NotAuthorizedException: Incorrect username or password.".into()
            )
        );
    }

    #[tokio::test]
    async fn test_unknown_user_is_authentication_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header(
                "x-amz-target",
                "AWSCognitoIdentityProviderService.InitiateAuth",
            ))
            .respond_with(amz_error(400, "UserNotFoundException", "User does not exist."))
            .mount(&server)
            .await;

        let provider = provider(&server, settings()).await;
        let err = provider
            .obtain_credentials("nobody", "hunter2")
            .await
            .unwrap_err();

        assert!(matches!(err, CredentialError::Authentication(ref m) if m.starts_with("UserNotFound")));
    }

    #[tokio::test]
    async fn test_throttled_login_is_unavailable_not_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header(
                "x-amz-target",
                "AWSCognitoIdentityProviderService.InitiateAuth",
            ))
            .respond_with(amz_error(
                400,
                "TooManyRequestsException",
                "Too many requests.",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider(&server, settings()).await;
        let err = provider
            .obtain_credentials("advisor", "hunter2")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CredentialError::Unavailable("TooManyRequestsException: Too many requests.".into())
        );
    }

    #[tokio::test]
    async fn test_user_pool_fault_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header(
                "x-amz-target",
                "AWSCognitoIdentityProviderService.InitiateAuth",
            ))
            .respond_with(amz_error(500, "InternalErrorException", "Internal error."))
            .mount(&server)
            .await;

        let provider = provider(&server, settings()).await;
        let err = provider
            .obtain_credentials("advisor", "hunter2")
            .await
            .unwrap_err();

        assert!(matches!(err, CredentialError::Unavailable(ref m) if m.starts_with("InternalErrorException")));
    }

    #[tokio::test]
    async fn test_identity_pool_failure_is_federation_error() {
        let server = MockServer::start().await;
        mount_initiate_auth(&server).await;
        Mock::given(method("POST"))
            .and(header("x-amz-target", "AWSCognitoIdentityService.GetId"))
            .respond_with(amz_error(
                400,
                "ResourceNotFoundException",
                "IdentityPool 'ap-southeast-2:pool-guid' not found.",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider(&server, settings()).await;
        let err = provider
            .obtain_credentials("advisor", "hunter2")
            .await
            .unwrap_err();

        match err {
            CredentialError::Federation(reason) => {
                assert!(reason.starts_with("ResourceNotFoundException"))
            }
            other => panic!("expected federation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_credentials_payload_is_federation_error() {
        let server = MockServer::start().await;
        mount_initiate_auth(&server).await;
        mount_get_id(&server).await;
        Mock::given(method("POST"))
            .and(header(
                "x-amz-target",
                "AWSCognitoIdentityService.GetCredentialsForIdentity",
            ))
            .respond_with(amz_json(json!({ "IdentityId": "ap-southeast-2:identity-1" })))
            .mount(&server)
            .await;

        let provider = provider(&server, settings()).await;
        let err = provider
            .obtain_credentials("advisor", "hunter2")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CredentialError::Federation("GetCredentialsForIdentity returned no credentials".into())
        );
    }

    #[tokio::test]
    async fn test_missing_app_client_id_fails_before_network() {
        let server = MockServer::start().await;
        let provider = provider(
            &server,
            CognitoSettings {
                app_client_id: None,
                ..settings()
            },
        )
        .await;

        let err = provider
            .obtain_credentials("advisor", "hunter2")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CredentialError::Unavailable("app client id is not configured".into())
        );
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_identity_pool_is_federation_error() {
        let server = MockServer::start().await;
        mount_initiate_auth(&server).await;
        let provider = provider(
            &server,
            CognitoSettings {
                identity_pool_id: Some("   ".to_string()),
                ..settings()
            },
        )
        .await;

        let err = provider
            .obtain_credentials("advisor", "hunter2")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CredentialError::Federation("identity pool id is not configured".into())
        );
    }
}
