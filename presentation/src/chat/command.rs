//! Slash commands understood by the chat REPL

use advisor_domain::{AnswerStyle, DomainError, Model, Temperature};
use thiserror::Error;

/// A parsed `/command` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    /// List the model catalog
    Models,
    /// Show the current model, temperature and style
    Status,
    Model(Model),
    Style(AnswerStyle),
    Temperature(Temperature),
    /// Start a new conversation
    Clear,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

impl ReplCommand {
    /// Parse a line starting with `/`.
    ///
    /// `/model` takes either a Bedrock model id or the 1-based position of a
    /// model in [`Model::catalog`].
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        match name {
            "/quit" | "/exit" | "/q" => Ok(ReplCommand::Quit),
            "/help" | "/h" | "/?" => Ok(ReplCommand::Help),
            "/models" => Ok(ReplCommand::Models),
            "/status" => Ok(ReplCommand::Status),
            "/clear" | "/new" => Ok(ReplCommand::Clear),
            "/model" => {
                if arg.is_empty() {
                    return Err(CommandError::MissingArgument("/model <id|number>"));
                }
                Ok(ReplCommand::Model(parse_model(arg)?))
            }
            "/style" => {
                if arg.is_empty() {
                    return Err(CommandError::MissingArgument("/style brief|comprehensive"));
                }
                Ok(ReplCommand::Style(arg.parse()?))
            }
            "/temperature" | "/temp" => {
                if arg.is_empty() {
                    return Err(CommandError::MissingArgument(
                        "/temperature precise|balanced|<0.0-1.0>",
                    ));
                }
                Ok(ReplCommand::Temperature(Temperature::parse_preset(arg)?))
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }

    pub fn help_text() -> &'static str {
        "Commands:
  /help, /h, /?                  - Show this help
  /models                        - List available models
  /model <id|number>             - Switch model
  /temperature precise|balanced|<n> - Set sampling temperature
  /style brief|comprehensive     - Set answer length
  /status                        - Show current settings
  /clear                         - Start a new conversation
  /quit, /exit, /q               - Exit chat"
    }
}

fn parse_model(arg: &str) -> Result<Model, DomainError> {
    let catalog = Model::catalog();
    if let Ok(index) = arg.parse::<usize>()
        && (1..=catalog.len()).contains(&index)
    {
        return Ok(catalog[index - 1].clone());
    }
    Model::try_new(arg)
}
