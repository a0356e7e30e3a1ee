//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod chat_model;
pub mod client_builder;
pub mod conversation_logger;
pub mod credential_broker;
