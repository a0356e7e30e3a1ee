//! Interactive chat module
//!
//! Provides a reedline-based chat interface that keeps the conversation
//! and the selected model, temperature and answer style between turns.

mod command;
mod repl;
mod session;

pub use command::{CommandError, ReplCommand};
pub use repl::{ChatRepl, ReplConfig};
pub use session::{ChatSession, CommandOutcome};
