//! Rendering of AWS SDK errors for the application-layer error types.

use aws_sdk_cognitoidentity::error::SdkError;
use aws_smithy_types::error::display::DisplayErrorContext;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use std::error::Error;
use std::fmt::Debug;

/// Error code the AWS services use for a stale session token.
pub const EXPIRED_TOKEN_CODE: &str = "ExpiredTokenException";

/// The service error code, if the request reached the service.
pub fn service_error_code<E, R>(err: &SdkError<E, R>) -> Option<&str>
where
    E: ProvideErrorMetadata,
{
    match err {
        SdkError::ServiceError(service) => service.err().code(),
        _ => None,
    }
}

/// `Code: message` for service errors, the full source chain otherwise.
pub fn describe_sdk_error<E, R>(err: &SdkError<E, R>) -> String
where
    E: ProvideErrorMetadata + Error + 'static,
    R: Debug,
{
    if let SdkError::ServiceError(service) = err {
        let e = service.err();
        return match (e.code(), e.message()) {
            (Some(code), Some(message)) => format!("{}: {}", code, message),
            (Some(code), None) => code.to_string(),
            _ => DisplayErrorContext(e).to_string(),
        };
    }
    DisplayErrorContext(err).to_string()
}
