//! The parameters a chat client is built for

use super::model::Model;
use super::temperature::Temperature;
use serde::{Deserialize, Serialize};

/// Model and temperature for one LLM client (Value Object)
///
/// Clients are cached per `ClientSpec`, so two specs compare equal exactly
/// when they would produce interchangeable clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ClientSpec {
    pub model: Model,
    pub temperature: Temperature,
}

impl ClientSpec {
    pub fn new(model: Model, temperature: Temperature) -> Self {
        Self { model, temperature }
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: Temperature) -> Self {
        self.temperature = temperature;
        self
    }
}

impl std::fmt::Display for ClientSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.model, self.temperature)
    }
}
