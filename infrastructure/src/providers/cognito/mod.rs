//! AWS Cognito credential provider
//!
//! Federates a fixed user pool login into temporary AWS credentials
//! through a Cognito identity pool.

mod provider;
mod types;

pub use provider::{CognitoCredentialProvider, CognitoSettings};
pub use types::login_provider_name;
