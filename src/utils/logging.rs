//! File-based tracing setup
//!
//! The TUI owns stdout and the CLI prints results there, so logs always go to a file:
//! `$PORTFOLIO_LOG_DIR/portfolio-explorer.log`, or the platform data directory
//! (`~/.local/share/portfolio-explorer/logs/` on Linux). Verbosity follows `PORTFOLIO_LOG`
//! using `EnvFilter` syntax (`debug`, `portfolio_explorer::assistant=trace`, ...).

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use super::environment::{DEFAULT_LOG_FILTER, get_log_dir, get_log_filter};

const LOG_FILENAME: &str = "portfolio-explorer.log";

/// Install the global subscriber. Keep the returned guard alive for the life of the
/// process; dropping it flushes and stops the background writer.
///
/// Returns `Ok(None)` when no log directory can be determined.
pub fn init_logging() -> Result<Option<WorkerGuard>> {
    let Some(log_dir) = get_log_dir() else {
        return Ok(None);
    };

    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::never(&log_dir, LOG_FILENAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_new(get_log_filter())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "portfolio-explorer starting");
    Ok(Some(guard))
}
