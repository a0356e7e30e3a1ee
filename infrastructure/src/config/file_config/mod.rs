//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to adapter settings and
//! domain types on demand.

mod aws;
mod bedrock;
mod logging;
mod prompt;

pub use aws::{FileAwsConfig, FileCognitoConfig};
pub use bedrock::FileBedrockConfig;
pub use logging::FileLoggingConfig;
pub use prompt::FilePromptConfig;

use crate::providers::bedrock::BedrockSettings;
use crate::providers::cognito::CognitoSettings;
use advisor_domain::{ConfigIssue, Login};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Region and Cognito pool identifiers
    pub aws: FileAwsConfig,
    /// Fixed service login
    pub cognito: FileCognitoConfig,
    /// Default model and generation parameters
    pub bedrock: FileBedrockConfig,
    /// System prompt and answer style
    pub prompt: FilePromptConfig,
    /// Log and transcript location
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// 1. Missing broker settings (warnings: the credential step fails later)
    /// 2. Default model and temperature
    /// 3. Generation parameter ranges
    /// 4. Answer style enum
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.aws.missing_settings());
        issues.extend(self.cognito.missing_settings());
        issues.extend(self.bedrock.parse_spec().1);
        issues.extend(self.bedrock.inference_issues());
        issues.extend(self.prompt.parse_answer_style().1);

        issues
    }

    pub fn login(&self) -> Login {
        self.cognito.login()
    }

    pub fn cognito_settings(&self) -> CognitoSettings {
        self.cognito.settings(&self.aws)
    }

    pub fn bedrock_settings(&self) -> BedrockSettings {
        self.bedrock.settings(self.aws.region.clone())
    }
}
