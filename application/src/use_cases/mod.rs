//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod ask_advisor;
pub mod client_factory;
