//! Log file setup.
//!
//! Logs never go to the terminal, which belongs to the chat. They are written
//! to `logs/shiori.log.YYYY-MM-DD` next to the config file.

use anyhow::{Context, Result};
use shiori_infrastructure::ShioriPaths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` overrides `default_filter`.
///
/// The returned guard flushes buffered lines on drop; keep it alive until
/// the process exits.
pub fn init(default_filter: &str) -> Result<WorkerGuard> {
    let logs_dir = ShioriPaths::logs_dir()?;
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "shiori.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!("[Startup] Logging to {}", logs_dir.display());
    Ok(guard)
}
