//! CLI command definitions

use advisor_domain::{AnswerStyle, ClientSpec, DomainError, Model, Temperature};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Answer with the time spent thinking
    Text,
    /// Answer text only
    Answer,
    /// JSON output
    Json,
}

/// CLI arguments for course-advisor
#[derive(Parser, Debug)]
#[command(name = "course-advisor")]
#[command(author, version, about = "Course advisor chat backed by Amazon Bedrock")]
#[command(long_about = r#"
Course Advisor answers questions about courses using a foundation model on
Amazon Bedrock. A fixed service login is exchanged with Cognito for
temporary AWS credentials, which are cached and refreshed when they expire.

Configuration is merged from (in priority order):
1. Environment variables   AWS_REGION, COGNITO_USERNAME, AWS_MODEL_ID, ...
2. --config <path>         Explicit config file
3. ./advisor.toml          Project-level config
4. ~/.config/course-advisor/config.toml   Global config

Example:
  course-advisor "What are the prerequisites for COSC2626?"
  course-advisor -m amazon.nova-pro-v1:0 -t precise "Which courses run in semester 2?"
  course-advisor --chat --style comprehensive
  course-advisor --check-credentials
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Bedrock model id (overrides the configured default)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Sampling temperature: precise, balanced or a number in 0.0..=1.0
    #[arg(short, long, value_name = "TEMPERATURE")]
    pub temperature: Option<String>,

    /// Answer style: brief or comprehensive
    #[arg(short, long, value_name = "STYLE")]
    pub style: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files (environment still applies)
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and exit
    #[arg(long)]
    pub show_config: bool,

    /// Obtain credentials once, print their expiry and exit
    #[arg(long)]
    pub check_credentials: bool,

    /// Do not write the JSONL conversation transcript
    #[arg(long)]
    pub no_transcript: bool,
}

impl Cli {
    /// Apply `--model` and `--temperature` on top of the configured spec
    pub fn client_spec(&self, configured: ClientSpec) -> Result<ClientSpec, DomainError> {
        let mut spec = configured;
        if let Some(model) = &self.model {
            spec = spec.with_model(Model::try_new(model)?);
        }
        if let Some(temperature) = &self.temperature {
            spec = spec.with_temperature(Temperature::parse_preset(temperature)?);
        }
        Ok(spec)
    }

    /// Apply `--style` on top of the configured answer style
    pub fn answer_style(&self, configured: AnswerStyle) -> Result<AnswerStyle, DomainError> {
        match &self.style {
            Some(style) => style.parse(),
            None => Ok(configured),
        }
    }
}
