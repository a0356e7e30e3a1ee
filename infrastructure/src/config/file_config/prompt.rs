//! Prompt configuration from TOML (`[prompt]` section)

use crate::prompt::{DEFAULT_SYSTEM_PROMPT_PATH, PromptLoader};
use advisor_domain::{AnswerStyle, ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptConfig {
    /// System prompt template (`ADVISOR_SYSTEM_PROMPT`, default: "prompts/system.md")
    pub system_prompt: PathBuf,
    /// Default answer style: "brief" or "comprehensive"
    pub answer_style: String,
}

impl Default for FilePromptConfig {
    fn default() -> Self {
        Self {
            system_prompt: PathBuf::from(DEFAULT_SYSTEM_PROMPT_PATH),
            answer_style: AnswerStyle::default().as_str().to_string(),
        }
    }
}

impl FilePromptConfig {
    /// Parse answer_style, falling back to brief for unknown values.
    pub fn parse_answer_style(&self) -> (AnswerStyle, Vec<ConfigIssue>) {
        match self.answer_style.parse::<AnswerStyle>() {
            Ok(style) => (style, vec![]),
            Err(_) => (
                AnswerStyle::default(),
                vec![ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "prompt.answer_style".to_string(),
                        value: self.answer_style.clone(),
                        valid_values: vec!["brief".to_string(), "comprehensive".to_string()],
                    },
                    message: format!(
                        "prompt.answer_style: unknown value '{}', falling back to 'brief'",
                        self.answer_style
                    ),
                }],
            ),
        }
    }

    pub fn loader(&self) -> PromptLoader {
        PromptLoader::new(&self.system_prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer_style() {
        let config = FilePromptConfig {
            answer_style: "Comprehensive".to_string(),
            ..Default::default()
        };
        assert_eq!(config.parse_answer_style().0, AnswerStyle::Comprehensive);

        let config = FilePromptConfig {
            answer_style: "verbose".to_string(),
            ..Default::default()
        };
        let (style, issues) = config.parse_answer_style();
        assert_eq!(style, AnswerStyle::Brief);
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::InvalidEnumValue { .. }
        ));
    }
}
