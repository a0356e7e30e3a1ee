//! Spinner shown while the advisor is thinking

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Reports that a turn is in flight.
///
/// Disabled indicators (quiet mode, JSON output) draw nothing. The spinner
/// is cleared when the indicator is dropped, so an early return never
/// leaves it on screen.
pub struct ThinkingIndicator {
    bar: Option<ProgressBar>,
}

impl ThinkingIndicator {
    pub fn start(enabled: bool, message: &str) -> Self {
        if !enabled {
            return Self::hidden();
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    pub fn hidden() -> Self {
        Self { bar: None }
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Replace the spinner message (e.g. while credentials are refreshed)
    pub fn set_message(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(message.to_string());
        }
    }

    pub fn finish(mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Drop for ThinkingIndicator {
    fn drop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
