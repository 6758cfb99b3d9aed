use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;

/// Default log file location (the TUI owns stdout, so logs never go there)
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("gamify.log")
}

/// Initialize file-based logging.
///
/// `RUST_LOG` takes precedence over `level`. Returns a [`WorkerGuard`] that
/// must be held until shutdown so buffered entries are flushed. Returns `None`
/// if the path has no usable parent/file name or a subscriber is already set.
pub fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = default_log_path();
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}
