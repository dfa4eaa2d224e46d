//! Logging bootstrap
//!
//! Installs a `tracing-subscriber` fmt subscriber once per process.
//! `RUST_LOG`, when set, overrides the configured level.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

const SUPPORTED_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Errors installing the log subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("unsupported log level `{0}` (expected trace, debug, info, warn or error)")]
    UnsupportedLevel(String),

    #[error("failed to initialize logging: {0}")]
    Init(String),
}

/// Initialize process-wide logging at `level`.
///
/// # Errors
/// - `level` is not one of trace/debug/info/warn/error
/// - a global subscriber is already installed
pub fn init_logging(level: &str) -> Result<(), LoggingError> {
    let level = normalize_level(level)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    let lowered = level.trim().to_ascii_lowercase();
    SUPPORTED_LEVELS
        .iter()
        .copied()
        .find(|l| *l == lowered)
        .ok_or_else(|| LoggingError::UnsupportedLevel(level.to_string()))
}
