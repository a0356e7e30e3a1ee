//! AWS Bedrock Converse API provider
//!
//! Builds Bedrock runtime clients from federated credentials and talks to
//! models through the Converse API.

mod builder;
mod client;
mod types;

pub use builder::{BedrockClientBuilder, BedrockSettings, DEFAULT_EXPIRY_SKEW};
pub use client::{BedrockChatClient, InferenceSettings};
