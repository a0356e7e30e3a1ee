//! Application-level configuration.
//!
//! - [`SessionParams`]: cache lifetimes for credentials and clients

pub mod session_params;

pub use session_params::{DEFAULT_SESSION_TTL, SessionParams};
