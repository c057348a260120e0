//! Logging setup for the command line tool

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::log_path;

/// Initialize the logger, writing to stderr
///
/// The level defaults to `warn` and can be overridden with `RUST_LOG`.
pub fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Initialize the logger, writing to a daily log file at [`log_path`]
///
/// The returned guard must be held until exit so buffered lines are flushed.
pub fn init_file_logger() -> std::io::Result<WorkerGuard> {
    let path = log_path();
    let (Some(dir), Some(file_name)) = (path.parent(), path.file_name()) else {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Invalid log path: {}", path.display()),
        ));
    };
    std::fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::daily(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}
