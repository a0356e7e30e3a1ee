//! System prompt template with `{answer_style}` and `{time}` placeholders

use super::answer_style::AnswerStyle;
use chrono::{DateTime, TimeZone};

/// A system prompt loaded from disk, rendered once per turn.
///
/// Unknown placeholders are left untouched so prompt authors can write
/// literal braces without escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemPromptTemplate {
    source: String,
}

impl SystemPromptTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_empty(&self) -> bool {
        self.source.trim().is_empty()
    }

    /// Substitute the answer style instruction and the current time.
    pub fn render<Tz>(&self, style: AnswerStyle, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let time = now.format("%Y-%m-%d %H:%M:%S%.6f%:z").to_string();
        self.source
            .replace("{answer_style}", style.instruction())
            .replace("{time}", &time)
    }
}

impl From<&str> for SystemPromptTemplate {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
