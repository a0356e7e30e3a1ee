//! Local file system prompt loader
//!
//! Reads the system prompt template (by default `prompts/system.md`).
//! The advisor still answers without a system prompt, so a missing or
//! unreadable file degrades to an empty template with an error logged.

use advisor_domain::SystemPromptTemplate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error};

/// Default location of the system prompt, relative to the working directory.
pub const DEFAULT_SYSTEM_PROMPT_PATH: &str = "prompts/system.md";

#[derive(Error, Debug)]
pub enum PromptLoadError {
    #[error("Could not read system prompt {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("System prompt {0} is empty")]
    Empty(PathBuf),
}

/// Loads the system prompt template from disk.
#[derive(Debug, Clone)]
pub struct PromptLoader {
    path: PathBuf,
}

impl Default for PromptLoader {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_PROMPT_PATH)
    }
}

impl PromptLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the template, failing on I/O errors and blank files.
    pub fn load(&self) -> Result<SystemPromptTemplate, PromptLoadError> {
        let source = fs::read_to_string(&self.path).map_err(|source| PromptLoadError::Read {
            path: self.path.clone(),
            source,
        })?;

        let template = SystemPromptTemplate::new(source);
        if template.is_empty() {
            return Err(PromptLoadError::Empty(self.path.clone()));
        }

        debug!(
            "System prompt loaded from {} ({} bytes)",
            self.path.display(),
            template.source().len()
        );
        Ok(template)
    }

    /// Read the template, falling back to an empty one on failure.
    pub fn load_or_empty(&self) -> SystemPromptTemplate {
        self.load().unwrap_or_else(|e| {
            error!("{}; continuing without a system prompt", e);
            SystemPromptTemplate::default()
        })
    }
}
