//! AWS provider adapters
//!
//! - [`cognito`]: credential federation ([`CredentialBroker`](advisor_application::CredentialBroker))
//! - [`bedrock`]: client construction and chat ([`ClientBuilder`](advisor_application::ClientBuilder))

pub mod bedrock;
pub mod cognito;
pub(crate) mod error;
