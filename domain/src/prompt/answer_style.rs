//! How long-form the advisor's answers should be

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Answer length selected in the chat surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerStyle {
    #[default]
    Brief,
    Comprehensive,
}

impl AnswerStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerStyle::Brief => "brief",
            AnswerStyle::Comprehensive => "comprehensive",
        }
    }

    /// Instruction text substituted for `{answer_style}` in the system prompt
    pub fn instruction(&self) -> &'static str {
        match self {
            AnswerStyle::Brief => {
                "brief: You should summarise the answer into one or two short paragraphs."
            }
            AnswerStyle::Comprehensive => {
                "comprehensive: You should answer the question in a detailed and thorough manner, providing all relevant information and context."
            }
        }
    }
}

impl std::fmt::Display for AnswerStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AnswerStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "brief" => Ok(AnswerStyle::Brief),
            "comprehensive" | "full" => Ok(AnswerStyle::Comprehensive),
            other => Err(DomainError::InvalidAnswerStyle(other.to_string())),
        }
    }
}
