//! Configuration issues reported at startup.
//!
//! Missing broker settings are not fatal when the configuration loads: the
//! credential step that needs the setting fails when it runs. Startup
//! validation surfaces them early as structured issues with a severity.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: some operation will fail or behave unexpectedly.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A required setting is empty or absent.
    MissingSetting { field: String },
    /// A numeric setting is outside its valid range.
    OutOfRange { field: String, value: String },
    /// An enum-like setting has an unrecognised value.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn missing(field: &str, env_var: &str) -> Self {
        Self {
            severity: Severity::Warning,
            code: ConfigIssueCode::MissingSetting {
                field: field.to_string(),
            },
            message: format!("{} is not set (config key or {} environment variable)", field, env_var),
        }
    }

    pub fn out_of_range(field: &str, value: impl std::fmt::Display, expected: &str) -> Self {
        Self {
            severity: Severity::Error,
            code: ConfigIssueCode::OutOfRange {
                field: field.to_string(),
                value: value.to_string(),
            },
            message: format!("{}: {} is out of range ({})", field, value, expected),
        }
    }
}

/// Whether any issue is fatal
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}
