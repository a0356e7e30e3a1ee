//! Presentation layer for course-advisor
//!
//! This crate contains CLI definitions, output formatters,
//! progress indicators, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ChatSession, ReplCommand, ReplConfig};
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ThinkingIndicator;
