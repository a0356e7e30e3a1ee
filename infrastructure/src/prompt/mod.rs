//! System prompt loading from the local file system.

mod loader;

pub use loader::{DEFAULT_SYSTEM_PROMPT_PATH, PromptLoadError, PromptLoader};
