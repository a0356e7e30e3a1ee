//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for rolling diagnostic logs and transcripts (`ADVISOR_LOG_DIR`).
    /// Defaults to the platform data directory.
    pub dir: Option<PathBuf>,
    /// Write a JSONL transcript of each chat session
    pub transcript: bool,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            dir: None,
            transcript: true,
        }
    }
}

impl FileLoggingConfig {
    /// The configured directory, else `<data dir>/course-advisor/logs`,
    /// else `./logs`.
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .map(|d| d.join("course-advisor").join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs"))
        })
    }
}
