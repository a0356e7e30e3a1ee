//! Configuration loading for course-advisor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables (`AWS_REGION`, `COGNITO_USERNAME`, ...)
//! 2. `--config <path>` specified file
//! 3. Project root: `./advisor.toml` or `./.advisor.toml`
//! 4. Global: `$XDG_CONFIG_HOME/course-advisor/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAwsConfig, FileBedrockConfig, FileCognitoConfig, FileConfig, FileLoggingConfig,
    FilePromptConfig,
};
pub use loader::{ConfigLoader, ENV_OVERRIDES};
