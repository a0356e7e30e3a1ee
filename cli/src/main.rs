//! CLI entrypoint for Course Advisor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;

use advisor_application::{AskAdvisorInput, AskAdvisorUseCase, ResilientClientFactory};
use advisor_domain::{Conversation, has_errors};
use advisor_infrastructure::{
    BedrockClientBuilder, CognitoCredentialProvider, ConfigLoader, JsonlConversationLogger,
};
use advisor_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputFormat, ReplConfig, ThinkingIndicator,
};
use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    let log_dir = config.logging.resolved_dir();
    let _log_guard = logging::init(cli.verbose, &log_dir);

    info!("Starting course-advisor");

    let issues = config.validate();
    if has_errors(&issues) || (!issues.is_empty() && !cli.quiet) {
        eprintln!("{}", ConsoleFormatter::format_issues(&issues));
    }
    if has_errors(&issues) {
        bail!("Invalid configuration");
    }

    let spec = cli.client_spec(config.bedrock.parse_spec().0)?;
    let style = cli.answer_style(config.prompt.parse_answer_style().0)?;

    // === Dependency Injection ===
    let broker = Arc::new(CognitoCredentialProvider::new(config.cognito_settings()).await);
    let builder = BedrockClientBuilder::new(config.bedrock_settings());
    let factory = Arc::new(ResilientClientFactory::new(broker, builder, config.login()));

    if cli.check_credentials {
        let credentials = factory
            .obtain_credentials()
            .await
            .context("Could not obtain credentials")?;
        println!(
            "{}",
            ConsoleFormatter::format_credentials(&credentials, chrono::Utc::now())
        );
        return Ok(());
    }

    let mut use_case = AskAdvisorUseCase::new(factory, config.prompt.loader().load_or_empty());
    if config.logging.transcript
        && !cli.no_transcript
        && let Some(logger) = JsonlConversationLogger::in_dir(&log_dir)
    {
        info!("Conversation transcript: {}", logger.path().display());
        use_case = use_case.with_conversation_logger(Arc::new(logger));
    }

    // Chat mode
    if cli.chat {
        let repl_config = ReplConfig {
            show_progress: !cli.quiet,
            ..ReplConfig::default()
        };
        ChatRepl::new(use_case, spec, style)
            .with_config(repl_config)
            .run()
            .await?;
        return Ok(());
    }

    // Single question mode - question is required
    let Some(question) = cli.question.as_deref() else {
        bail!("Question is required. Use --chat for interactive mode.");
    };

    let mut conversation = Conversation::new();
    conversation.add_user_message(question);
    let input = AskAdvisorInput::new(conversation, spec, style);

    let indicator = ThinkingIndicator::start(
        !cli.quiet && cli.output != OutputFormat::Json,
        "Thinking...",
    );
    let result = use_case.execute(&input).await;
    indicator.finish();
    let output = result?;

    let text = match cli.output {
        OutputFormat::Text => ConsoleFormatter::format_answer(&output),
        OutputFormat::Answer => output.answer.clone(),
        OutputFormat::Json => ConsoleFormatter::format_json(&output, &input.spec, input.style),
    };
    println!("{}", text);

    Ok(())
}
