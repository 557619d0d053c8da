//! Tracing subscriber setup.

use crate::config::TuiConfig;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// The configured log file; logging is off without one.
    File,
    /// Standard error.
    Stderr,
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured filter. The interactive UI owns the
/// terminal, so it only ever logs to a file.
pub fn init_logging(config: &TuiConfig, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    let installed = match (target, config.log_file()) {
        (LogTarget::File, Some(path)) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
        (LogTarget::File, None) => return Ok(()),
        (LogTarget::Stderr, _) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
