//! Console output formatter for advisor answers and status

use advisor_application::AskAdvisorOutput;
use advisor_domain::{
    AnswerStyle, ClientSpec, ConfigIssue, Credentials, Model, Severity, format_thought_duration,
};
use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use serde_json::json;

/// Formats advisor output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Answer followed by the dimmed "Thought for ..." line
    pub fn format_answer(output: &AskAdvisorOutput) -> String {
        let mut text = output.answer.clone();

        let thought = format_thought_duration(output.elapsed);
        if !thought.is_empty() {
            text.push_str(&format!("\n\n{}", thought.dimmed()));
        }
        if output.refreshed {
            text.push_str(&format!("\n{}", "(session credentials were refreshed)".dimmed()));
        }
        text
    }

    /// Format as JSON
    pub fn format_json(output: &AskAdvisorOutput, spec: &ClientSpec, style: AnswerStyle) -> String {
        let value = json!({
            "answer": output.answer,
            "model": spec.model.as_str(),
            "temperature": spec.temperature.value(),
            "style": style.as_str(),
            "elapsed_ms": output.elapsed.as_millis() as u64,
            "refreshed": output.refreshed,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Numbered model catalog with the current model marked
    pub fn format_models(current: &Model) -> String {
        let mut output = format!("{}\n", "Available models:".cyan().bold());

        for (index, model) in Model::catalog().iter().enumerate() {
            let marker = if model == current { "*" } else { " " };
            output.push_str(&format!(
                "  {} {}. {:<30} {}\n",
                marker.green().bold(),
                index + 1,
                model.display_name(),
                model.as_str().dimmed()
            ));
        }
        if current.is_custom() {
            output.push_str(&format!("  {} {}\n", "*".green().bold(), current));
        }

        output.push_str(&format!(
            "\n{}",
            "Other Bedrock model ids are accepted; some models may be unavailable.".dimmed()
        ));
        output
    }

    pub fn format_status(spec: &ClientSpec, style: AnswerStyle, turns: usize) -> String {
        let temperature = match spec.temperature.preset_name() {
            Some(preset) => format!("{} ({})", spec.temperature, preset),
            None => spec.temperature.to_string(),
        };
        format!(
            "{} {}\n{} {}\n{} {}\n{} {}",
            "Model:".cyan().bold(),
            spec.model.display_name(),
            "Temperature:".cyan().bold(),
            temperature,
            "Answer style:".cyan().bold(),
            style,
            "Messages:".cyan().bold(),
            turns
        )
    }

    /// One line per issue, errors in red and warnings in yellow
    pub fn format_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| match issue.severity {
                Severity::Error => format!("{} {}", "error:".red().bold(), issue.message),
                Severity::Warning => format!("{} {}", "warning:".yellow().bold(), issue.message),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Expiry of freshly obtained credentials, in local time
    pub fn format_credentials(credentials: &Credentials, now: DateTime<Utc>) -> String {
        let remaining = credentials.remaining(now);
        let expires = credentials.expiration().with_timezone(&Local);
        format!(
            "{} access key {} valid until {} ({} minutes left)",
            "Credentials OK:".green().bold(),
            Self::mask(credentials.access_key_id()),
            expires.format("%Y-%m-%d %H:%M:%S %Z"),
            remaining.num_minutes()
        )
    }

    pub fn format_error(error: &dyn std::fmt::Display) -> String {
        format!("{} {}", "Error:".red().bold(), error)
    }

    /// Keep the first four characters of an identifier
    fn mask(id: &str) -> String {
        let visible: String = id.chars().take(4).collect();
        format!("{}****", visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_domain::{ConfigIssueCode, Temperature};
    use chrono::TimeZone;
    use std::time::Duration;

    fn plain() {
        colored::control::set_override(false);
    }

    fn output(elapsed: Duration, refreshed: bool) -> AskAdvisorOutput {
        AskAdvisorOutput {
            answer: "COSC2626 is Cloud Computing.".to_string(),
            elapsed,
            refreshed,
        }
    }

    #[test]
    fn test_format_answer_with_thought_time() {
        plain();
        let text = ConsoleFormatter::format_answer(&output(Duration::from_secs(65), false));
        assert_eq!(
            text,
            "COSC2626 is Cloud Computing.\n\nThought for 1 minute, 5 seconds"
        );
    }

    #[test]
    fn test_format_answer_notes_refresh() {
        plain();
        let text = ConsoleFormatter::format_answer(&output(Duration::ZERO, true));
        assert_eq!(
            text,
            "COSC2626 is Cloud Computing.\n(session credentials were refreshed)"
        );
    }

    #[test]
    fn test_format_json() {
        let spec = ClientSpec::new(Model::NovaPro, Temperature::PRECISE);
        let json = ConsoleFormatter::format_json(
            &output(Duration::from_millis(1500), false),
            &spec,
            AnswerStyle::Brief,
        );
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["model"], "amazon.nova-pro-v1:0");
        assert_eq!(value["elapsed_ms"], 1500);
        assert_eq!(value["style"], "brief");
    }

    #[test]
    fn test_format_models_marks_current() {
        plain();
        let text = ConsoleFormatter::format_models(&Model::Claude3Haiku);
        assert!(text.contains("* 2. Claude 3 Haiku"));
        assert!(text.contains("  1. Amazon Nova Pro"));
        assert!(text.contains("some models may be unavailable"));

        let custom = ConsoleFormatter::format_models(&Model::Custom("mistral.large".to_string()));
        assert!(custom.contains("* mistral.large"));
    }

    #[test]
    fn test_format_status_names_preset() {
        plain();
        let text = ConsoleFormatter::format_status(&ClientSpec::default(), AnswerStyle::Brief, 4);
        assert!(text.contains("Claude 3.5 Sonnet"));
        assert!(text.contains("0.5 (Balanced)"));
        assert!(text.contains("Messages: 4"));
    }

    #[test]
    fn test_format_issues() {
        plain();
        let issues = vec![
            ConfigIssue::missing("aws.region", "AWS_REGION"),
            ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::MissingSetting {
                    field: "bedrock.model".to_string(),
                },
                message: "bad model".to_string(),
            },
        ];
        let lines: Vec<String> = ConsoleFormatter::format_issues(&issues)
            .lines()
            .map(String::from)
            .collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("warning: aws.region"));
        assert_eq!(lines[1], "error: bad model");
    }

    #[test]
    fn test_format_credentials_masks_key() {
        plain();
        let now = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
        let credentials = Credentials::new(
            "ASIAEXAMPLEKEY",
            "secret",
            "token",
            Utc.with_ymd_and_hms(2025, 5, 1, 12, 45, 0).unwrap(),
        );
        let text = ConsoleFormatter::format_credentials(&credentials, now);
        assert!(text.contains("ASIA****"));
        assert!(!text.contains("EXAMPLEKEY"));
        assert!(!text.contains("secret"));
        assert!(text.contains("(45 minutes left)"));
    }
}
