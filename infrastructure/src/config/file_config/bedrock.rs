//! Bedrock configuration from TOML (`[bedrock]` section)

use crate::providers::bedrock::{BedrockSettings, InferenceSettings};
use advisor_domain::{ClientSpec, ConfigIssue, ConfigIssueCode, Model, Severity, Temperature};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBedrockConfig {
    /// Default model id (`AWS_MODEL_ID`, default: Claude 3.5 Sonnet)
    pub model: String,
    /// Default temperature (`BEDROCK_TEMPERATURE`, default: 0.5)
    pub temperature: f32,
    /// Nucleus sampling (`BEDROCK_TOP_P`, default: model default)
    pub top_p: Option<f32>,
    /// Max tokens per response (`BEDROCK_MAX_TOKENS`, default: 4096)
    pub max_tokens: u32,
    /// Override for the Bedrock runtime endpoint.
    pub endpoint_url: Option<String>,
}

impl Default for FileBedrockConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            temperature: Temperature::default().value(),
            top_p: None,
            max_tokens: 4096,
            endpoint_url: None,
        }
    }
}

impl FileBedrockConfig {
    /// Parse the default model and temperature, falling back to the
    /// built-in defaults for invalid values.
    pub fn parse_spec(&self) -> (ClientSpec, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let model = match Model::try_new(&self.model) {
            Ok(model) => model,
            Err(_) => {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::MissingSetting {
                        field: "bedrock.model".to_string(),
                    },
                    message: format!(
                        "bedrock.model is empty, falling back to '{}'",
                        Model::default()
                    ),
                });
                Model::default()
            }
        };

        let temperature = Temperature::new(self.temperature).unwrap_or_else(|_| {
            issues.push(ConfigIssue::out_of_range(
                "bedrock.temperature",
                self.temperature,
                "0.0..=1.0",
            ));
            Temperature::default()
        });

        (ClientSpec::new(model, temperature), issues)
    }

    /// Range checks for the generation parameters.
    pub(crate) fn inference_issues(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if let Some(top_p) = self.top_p
            && !(0.0..=1.0).contains(&top_p)
        {
            issues.push(ConfigIssue::out_of_range("bedrock.top_p", top_p, "0.0..=1.0"));
        }
        if self.max_tokens == 0 {
            issues.push(ConfigIssue::out_of_range(
                "bedrock.max_tokens",
                self.max_tokens,
                "at least 1",
            ));
        }
        issues
    }

    pub fn settings(&self, region: Option<String>) -> BedrockSettings {
        BedrockSettings {
            region,
            inference: InferenceSettings {
                top_p: self.top_p,
                max_tokens: Some(self.max_tokens),
            },
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}
