//! REPL (Read-Eval-Print Loop) for interactive chat

use super::command::ReplCommand;
use super::session::{ChatSession, CommandOutcome};
use crate::ConsoleFormatter;
use crate::progress::reporter::ThinkingIndicator;
use advisor_application::{AskAdvisorUseCase, ChatModel, ClientBuilder};
use advisor_domain::{AnswerStyle, ClientSpec};
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

/// REPL behaviour
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show the thinking spinner
    pub show_progress: bool,
    /// History file; `None` keeps history in memory only
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: dirs::data_dir()
                .map(|p| p.join("course-advisor").join("history.txt")),
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl<B: ClientBuilder>
where
    B::Client: ChatModel,
{
    session: ChatSession<B>,
    config: ReplConfig,
}

impl<B: ClientBuilder> ChatRepl<B>
where
    B::Client: ChatModel,
{
    pub fn new(use_case: AskAdvisorUseCase<B>, spec: ClientSpec, style: AnswerStyle) -> Self {
        Self {
            session: ChatSession::new(use_case, spec, style),
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("advisor".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();
        self.prewarm().await;

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    self.process_question(line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();

        let Some(path) = &self.config.history_file else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Chat history disabled ({}): {}", path.display(), e);
                editor
            }
        }
    }

    /// Fetch credentials before the first prompt so the first answer does
    /// not pay for the login. Failures are reported and retried on the
    /// first question.
    async fn prewarm(&self) {
        let indicator = ThinkingIndicator::start(self.config.show_progress, "Signing in...");
        let result = self.session.use_case().factory().obtain_credentials().await;
        indicator.finish();

        if let Err(e) = result {
            warn!("Credential pre-warm failed: {}", e);
            eprintln!("{}", ConsoleFormatter::format_error(&e));
            println!();
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "Course Advisor - Chat Mode".cyan().bold());
        println!();
        println!(
            "{}",
            ConsoleFormatter::format_status(
                self.session.spec(),
                self.session.style(),
                self.session.conversation().len()
            )
        );
        println!();
        println!("Type /help for commands.");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, line: &str) -> bool {
        let command = match ReplCommand::parse(line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                println!("Type /help for available commands");
                return false;
            }
        };

        match &command {
            ReplCommand::Help => println!("\n{}\n", ReplCommand::help_text()),
            ReplCommand::Models => {
                println!("\n{}\n", ConsoleFormatter::format_models(&self.session.spec().model))
            }
            ReplCommand::Status => println!(
                "\n{}\n",
                ConsoleFormatter::format_status(
                    self.session.spec(),
                    self.session.style(),
                    self.session.conversation().len()
                )
            ),
            _ => {}
        }

        match self.session.apply(command) {
            CommandOutcome::Exit => {
                println!("Bye!");
                true
            }
            CommandOutcome::Show(message) => {
                println!("{}", message.dimmed());
                false
            }
            CommandOutcome::Continue => false,
        }
    }

    async fn process_question(&mut self, question: &str) {
        println!();

        let indicator = ThinkingIndicator::start(self.config.show_progress, "Thinking...");
        let result = self.session.ask(question).await;
        indicator.finish();

        match result {
            Ok(output) => println!("{}", ConsoleFormatter::format_answer(&output)),
            Err(e) => eprintln!("{}", ConsoleFormatter::format_error(&e)),
        }
        println!();
    }
}
