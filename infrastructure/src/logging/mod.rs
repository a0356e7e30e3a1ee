//! Logging infrastructure: structured conversation transcripts.
//!
//! Provides [`JsonlConversationLogger`], a JSONL file writer that implements
//! the [`ConversationLogger`](advisor_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::{JsonlConversationLogger, transcript_file_name};
