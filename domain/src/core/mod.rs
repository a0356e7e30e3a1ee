//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: Bedrock model identifiers and the known catalog
//! - [`temperature::Temperature`]: validated sampling temperature
//! - [`client_spec::ClientSpec`]: the (model, temperature) pair a client is built for
//! - [`error::DomainError`]: domain-level errors

pub mod client_spec;
pub mod error;
pub mod model;
pub mod temperature;
