//! Log setup for the terminal binary.
//!
//! The alternate screen owns stdout, so logs only go to a file and only when
//! `MATCH3_LOG_PATH` is set. `RUST_LOG` picks the filter (default `info`).

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_PATH_ENV: &str = "MATCH3_LOG_PATH";

/// Install the global subscriber if a log path is configured.
///
/// Returns whether logging was enabled.
pub fn init_from_env() -> Result<bool> {
    match std::env::var_os(LOG_PATH_ENV) {
        Some(path) if !path.is_empty() => {
            init_file(Path::new(&path))?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Append logs to `path`, creating the file if needed.
pub fn init_file(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;
    Ok(())
}
