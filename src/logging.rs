use std::path::PathBuf;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

pub const LOG_FILE_NAME: &str = "loafy.log";

/// Non-blocking writer for `loafy.log` inside `log_dir`.
///
/// Returns `None` when the directory or file can't be set up; the caller
/// then runs without file logging.
pub fn file_writer(log_dir: anyhow::Result<PathBuf>) -> Option<(NonBlocking, WorkerGuard)> {
    let log_dir = log_dir.ok()?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(&log_dir)
        .ok()?;

    Some(tracing_appender::non_blocking(appender))
}
