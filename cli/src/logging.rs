//! Diagnostic logging: stderr at the `-v` level plus a daily rolling file.
//!
//! `RUST_LOG` overrides the level of both sinks. The file sink writes
//! through a non-blocking worker; keep the returned guard alive until exit
//! so buffered lines are flushed.

use anyhow::Result;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_FILE_PREFIX: &str = "course-advisor";
const MAX_LOG_FILES: usize = 30;

/// The AWS SDK is chatty at info; keep it at warn unless asked for more.
const QUIET_SDK: &str = "aws_config=warn,aws_smithy_runtime=warn,hyper_util=off";

/// Console filter directive for a `-v` count
pub fn console_directive(verbose: u8) -> String {
    match verbose {
        0 => "warn".to_string(),
        1 => format!("info,{}", QUIET_SDK),
        2 => "debug".to_string(),
        _ => "trace".to_string(), // -vvv or more
    }
}

/// File filter directive; the file keeps at least info so a failed run can
/// be diagnosed without re-running with `-v`.
pub fn file_directive(verbose: u8) -> String {
    if verbose <= 1 {
        format!("info,{}", QUIET_SDK)
    } else {
        console_directive(verbose)
    }
}

fn filter(directive: String) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

fn file_appender(dir: &Path) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)?;
    Ok(RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(dir)?)
}

/// Install the global subscriber.
///
/// File logging is best-effort: if `log_dir` cannot be used the console
/// sink still works and a warning is printed.
pub fn init(verbose: u8, log_dir: &Path) -> Option<WorkerGuard> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter(console_directive(verbose)));

    let (file, guard) = match file_appender(log_dir) {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(filter(file_directive(verbose)));
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!(
                "warning: file logging disabled ({}): {}",
                log_dir.display(),
                e
            );
            (None, None)
        }
    };

    tracing_subscriber::registry().with(console).with(file).init();
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_directive_by_verbosity() {
        assert_eq!(console_directive(0), "warn");
        assert!(console_directive(1).starts_with("info,"));
        assert_eq!(console_directive(2), "debug");
        assert_eq!(console_directive(7), "trace");
    }

    #[test]
    fn test_file_keeps_info_at_low_verbosity() {
        assert_eq!(file_directive(0), file_directive(1));
        assert!(file_directive(0).starts_with("info,"));
        assert_eq!(file_directive(3), "trace");
    }

    #[test]
    fn test_file_appender_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("nested").join("logs");

        file_appender(&logs).unwrap();
        assert!(logs.is_dir());
    }
}
