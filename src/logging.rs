//! File logging setup
//!
//! The terminal belongs to the TUI, so log output goes to a file under the
//! user's cache directory.

use crate::{QuizError, Result, APP_NAME, LOG_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Default log directory: $CACHE_HOME/pakquiz
pub fn default_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default())
        .join(APP_NAME)
}

/// Install the global tracing subscriber writing to `log_dir/pakquiz.log`.
///
/// The returned guard flushes pending records on drop and must be held for
/// the lifetime of the program. `RUST_LOG` overrides the default `info` level.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .try_init()
        .map_err(|e| QuizError::ConfigError(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}
