//! Model value object representing a Bedrock foundation model

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Bedrock models the advisor can talk to (Value Object)
///
/// The named variants form the catalog offered in the chat surface.
/// Any other Bedrock model id is carried as [`Model::Custom`]; availability
/// depends on the account, so unknown ids are accepted and only fail when
/// the service rejects them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    NovaPro,
    Claude3Haiku,
    Claude35Sonnet,
    Claude37Sonnet,
    Llama4Maverick,
    Custom(String),
}

impl Model {
    /// Get the Bedrock model id
    pub fn as_str(&self) -> &str {
        match self {
            Model::NovaPro => "amazon.nova-pro-v1:0",
            Model::Claude3Haiku => "anthropic.claude-3-haiku-20240307-v1:0",
            Model::Claude35Sonnet => "anthropic.claude-3-5-sonnet-20240620-v1:0",
            Model::Claude37Sonnet => "anthropic.claude-3-7-sonnet-20250219-v1:0",
            Model::Llama4Maverick => "us.meta.llama4-maverick-17b-instruct-v1:0",
            Model::Custom(s) => s,
        }
    }

    /// Human-readable name shown in model listings
    pub fn display_name(&self) -> &str {
        match self {
            Model::NovaPro => "Amazon Nova Pro",
            Model::Claude3Haiku => "Claude 3 Haiku",
            Model::Claude35Sonnet => "Claude 3.5 Sonnet",
            Model::Claude37Sonnet => "Claude 3.7 Sonnet",
            Model::Llama4Maverick => "Llama 4 Maverick 17B Instruct",
            Model::Custom(s) => s,
        }
    }

    /// The models offered in the chat surface, in display order
    pub fn catalog() -> Vec<Model> {
        vec![
            Model::NovaPro,
            Model::Claude3Haiku,
            Model::Claude35Sonnet,
            Model::Claude37Sonnet,
            Model::Llama4Maverick,
        ]
    }

    /// Parse a model id, rejecting blank input
    pub fn try_new(id: &str) -> Result<Self, DomainError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(DomainError::InvalidModel(id.to_string()));
        }
        Ok(id.parse::<Model>().unwrap_or_else(|never| match never {}))
    }

    /// Check if this is an Anthropic model served through Bedrock
    pub fn is_claude(&self) -> bool {
        self.as_str().contains("anthropic.claude")
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Model::Custom(_))
    }
}

impl Default for Model {
    /// Returns the default model (Claude 3.5 Sonnet)
    fn default() -> Self {
        Model::Claude35Sonnet
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "amazon.nova-pro-v1:0" => Model::NovaPro,
            "anthropic.claude-3-haiku-20240307-v1:0" => Model::Claude3Haiku,
            "anthropic.claude-3-5-sonnet-20240620-v1:0" => Model::Claude35Sonnet,
            "anthropic.claude-3-7-sonnet-20250219-v1:0" => Model::Claude37Sonnet,
            "us.meta.llama4-maverick-17b-instruct-v1:0" => Model::Llama4Maverick,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Model::try_new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_from_str() {
        let model: Model = "anthropic.claude-3-haiku-20240307-v1:0".parse().unwrap();
        assert_eq!(model, Model::Claude3Haiku);

        let custom: Model = "mistral.mistral-large-2402-v1:0".parse().unwrap();
        assert_eq!(
            custom,
            Model::Custom("mistral.mistral-large-2402-v1:0".to_string())
        );
        assert!(custom.is_custom());
    }

    #[test]
    fn test_catalog_ids_round_trip_through_parse() {
        for model in Model::catalog() {
            let parsed: Model = model.as_str().parse().unwrap();
            assert_eq!(parsed, model);
            assert!(!parsed.is_custom());
        }
    }

    #[test]
    fn test_default_is_claude_35_sonnet() {
        assert_eq!(Model::default(), Model::Claude35Sonnet);
        assert_eq!(Model::default().display_name(), "Claude 3.5 Sonnet");
    }

    #[test]
    fn test_try_new_rejects_blank() {
        assert!(matches!(
            Model::try_new("   "),
            Err(DomainError::InvalidModel(_))
        ));
        assert_eq!(
            Model::try_new(" amazon.nova-pro-v1:0 ").unwrap(),
            Model::NovaPro
        );
    }

    #[test]
    fn test_is_claude() {
        assert!(Model::Claude37Sonnet.is_claude());
        assert!(!Model::NovaPro.is_claude());
        assert!(!Model::Llama4Maverick.is_claude());
    }

    #[test]
    fn test_serde_uses_model_id() {
        let json = serde_json::to_string(&Model::NovaPro).unwrap();
        assert_eq!(json, "\"amazon.nova-pro-v1:0\"");
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Model::NovaPro);
        assert!(serde_json::from_str::<Model>("\"\"").is_err());
    }
}
