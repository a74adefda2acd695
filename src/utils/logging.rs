//! Structured logging setup.
//!
//! Thin wrapper over `tracing-subscriber` driven by [`LoggingConfig`]. The
//! `RUST_LOG` environment variable, when set, overrides the configured level.

use crate::config::LoggingConfig;
use crate::error::{ProtocolError, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber described by `config`.
///
/// Fails if a subscriber is already installed. Does nothing when console
/// logging is switched off.
pub fn try_init(config: &LoggingConfig) -> Result<()> {
    if !config.log_to_console {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    let result = if config.json_format {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    result
        .map_err(|e| ProtocolError::ConfigError(format!("Failed to install subscriber: {e}")))?;

    info!(app = %config.app_name, "Logging initialized");
    Ok(())
}

/// Install the global subscriber, ignoring an already-installed one.
///
/// Demos and tests call this at every entry point; only the first install
/// wins.
pub fn init(config: &LoggingConfig) {
    let _ = try_init(config);
}
