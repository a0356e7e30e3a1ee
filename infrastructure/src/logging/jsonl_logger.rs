//! JSONL transcript writer for conversation events.
//!
//! Each [`ConversationEvent`] becomes one JSON line carrying the event
//! `type`, a `timestamp` and the `session` it belongs to. Files are opened
//! in append mode so a transcript survives restarts of the same session name.

use advisor_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// File name of the transcript for a session started at `started`.
pub fn transcript_file_name(started: &DateTime<Local>) -> String {
    format!("{}.conversation.jsonl", started.format("%Y%m%d-%H%M%S"))
}

/// Transcript logger writing one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`; each line is flushed as it is
/// written and the buffer is flushed again on `Drop`.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
    session: String,
}

impl JsonlConversationLogger {
    /// Open (or create) a transcript at `path`.
    ///
    /// Creates parent directories as needed. Returns `None` if the file
    /// cannot be opened; transcripts are best-effort.
    pub fn new(path: impl AsRef<Path>, session: impl Into<String>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create transcript directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open transcript file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
            session: session.into(),
        })
    }

    /// Open a fresh transcript in `dir` named after the current local time.
    pub fn in_dir(dir: impl AsRef<Path>) -> Option<Self> {
        let started = Local::now();
        let name = transcript_file_name(&started);
        let session = started.format("%Y%m%d-%H%M%S").to_string();
        Self::new(dir.as_ref().join(name), session)
    }

    /// Get the path to the transcript file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    fn record(&self, event: ConversationEvent) -> Value {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(event.event_type));
        map.insert("timestamp".to_string(), Value::from(timestamp));
        map.insert("session".to_string(), Value::from(self.session.clone()));
        Value::Object(map)
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let Ok(line) = serde_json::to_string(&self.record(event)) else {
            return;
        };

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            warn!("Could not write transcript {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        let writer = self.writer.get_mut().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.flush();
    }
}
