//! Conversions between Cognito SDK types and domain types

use advisor_application::ports::credential_broker::CredentialError;
use advisor_domain::Credentials;
use aws_sdk_cognitoidentity::types as identity;
use chrono::{DateTime, Utc};

/// Login map key identifying the user pool as the identity provider.
pub fn login_provider_name(region: &str, user_pool_id: &str) -> String {
    format!("cognito-idp.{}.amazonaws.com/{}", region, user_pool_id)
}

/// Convert a smithy timestamp to a chrono UTC timestamp.
pub fn to_utc(timestamp: &aws_smithy_types::DateTime) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(timestamp.secs(), timestamp.subsec_nanos())
}

/// Convert the GetCredentialsForIdentity payload to domain credentials.
///
/// Every field is optional on the wire; a missing one is a federation failure.
pub fn to_credentials(credentials: &identity::Credentials) -> Result<Credentials, CredentialError> {
    let missing = |field: &str| {
        CredentialError::Federation(format!("credentials response is missing {}", field))
    };

    let access_key_id = credentials
        .access_key_id()
        .ok_or_else(|| missing("AccessKeyId"))?;
    let secret_key = credentials.secret_key().ok_or_else(|| missing("SecretKey"))?;
    let session_token = credentials
        .session_token()
        .ok_or_else(|| missing("SessionToken"))?;
    let expiration = credentials
        .expiration()
        .and_then(to_utc)
        .ok_or_else(|| missing("Expiration"))?;

    Ok(Credentials::new(
        access_key_id,
        secret_key,
        session_token,
        expiration,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_login_provider_name() {
        assert_eq!(
            login_provider_name("ap-southeast-2", "ap-southeast-2_AbC123"),
            "cognito-idp.ap-southeast-2.amazonaws.com/ap-southeast-2_AbC123"
        );
    }

    #[test]
    fn test_to_utc() {
        let ts = aws_smithy_types::DateTime::from_secs(1_767_225_600);
        assert_eq!(
            to_utc(&ts),
            Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_to_credentials() {
        let wire = identity::Credentials::builder()
            .access_key_id("ASIAEXAMPLE")
            .secret_key("secret")
            .session_token("token")
            .expiration(aws_smithy_types::DateTime::from_secs(1_767_225_600))
            .build();

        let credentials = to_credentials(&wire).unwrap();
        assert_eq!(credentials.access_key_id(), "ASIAEXAMPLE");
        assert_eq!(credentials.session_token(), "token");
        assert_eq!(
            credentials.expiration(),
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_to_credentials_missing_field() {
        let wire = identity::Credentials::builder()
            .access_key_id("ASIAEXAMPLE")
            .secret_key("secret")
            .build();

        let err = to_credentials(&wire).unwrap_err();
        assert_eq!(
            err,
            CredentialError::Federation("credentials response is missing SessionToken".into())
        );
    }
}
