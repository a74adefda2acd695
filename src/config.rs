//! # Configuration Management
//!
//! Centralized configuration for the packet encoding core.
//!
//! This module provides structured configuration for the encoder and its
//! logging, covering buffer sizing, the notice length policy and the
//! oversized-frame warning threshold.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment variable overrides (`GENESIS_PROTOCOL_*`)

use crate::error::{ProtocolError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Initial payload buffer capacity for a fresh frame builder
pub const DEFAULT_FRAME_CAPACITY: usize = 64;

/// Frames above this encoded size are logged at warn level
pub const DEFAULT_WARN_FRAME_BYTES: usize = 4096;

/// Hard ceiling on notice text imposed by its one-byte length prefix
pub const NOTICE_TEXT_LIMIT: usize = 255;

/// Main configuration structure that contains all configurable settings
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ProtocolConfig {
    /// Encoder-specific configuration
    #[serde(default)]
    pub encoder: EncoderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ProtocolConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Start with defaults
        let mut config = Self::default();

        // Override with environment variables
        if let Ok(capacity) = std::env::var("GENESIS_PROTOCOL_FRAME_CAPACITY") {
            if let Ok(val) = capacity.parse::<usize>() {
                config.encoder.initial_frame_capacity = val;
            }
        }

        if let Ok(limit) = std::env::var("GENESIS_PROTOCOL_MAX_NOTICE_BYTES") {
            if let Ok(val) = limit.parse::<usize>() {
                config.encoder.max_notice_bytes = val;
            }
        }

        if let Ok(threshold) = std::env::var("GENESIS_PROTOCOL_WARN_FRAME_BYTES") {
            if let Ok(val) = threshold.parse::<usize>() {
                config.encoder.warn_frame_bytes = val;
            }
        }

        if let Ok(level) = std::env::var("GENESIS_PROTOCOL_LOG_LEVEL") {
            if let Ok(val) = level.parse::<Level>() {
                config.logging.log_level = val;
            }
        }

        if let Ok(json) = std::env::var("GENESIS_PROTOCOL_JSON_LOGS") {
            if let Ok(val) = json.parse::<bool>() {
                config.logging.json_format = val;
            }
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        // Validate encoder configuration
        errors.extend(self.encoder.validate());

        // Validate logging configuration
        errors.extend(self.logging.validate());

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProtocolError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Encoder-specific configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EncoderConfig {
    /// Initial payload buffer capacity for variable-length messages
    pub initial_frame_capacity: usize,

    /// Maximum notice text length in bytes after substitution
    pub max_notice_bytes: usize,

    /// Encoded frame size above which a warning is logged
    pub warn_frame_bytes: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            initial_frame_capacity: DEFAULT_FRAME_CAPACITY,
            max_notice_bytes: NOTICE_TEXT_LIMIT,
            warn_frame_bytes: DEFAULT_WARN_FRAME_BYTES,
        }
    }
}

impl EncoderConfig {
    /// Validate encoder configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        // Validate frame capacity
        if self.initial_frame_capacity == 0 {
            errors.push("Initial frame capacity must be greater than 0".to_string());
        } else if self.initial_frame_capacity > 65_536 {
            errors.push(format!(
                "Initial frame capacity too large: {} (maximum useful: 65,536)",
                self.initial_frame_capacity
            ));
        }

        // Validate notice length policy
        if self.max_notice_bytes == 0 {
            errors.push("Max notice bytes must be greater than 0".to_string());
        } else if self.max_notice_bytes > NOTICE_TEXT_LIMIT {
            errors.push(format!(
                "Max notice bytes too large: {} (wire limit: {})",
                self.max_notice_bytes, NOTICE_TEXT_LIMIT
            ));
        }

        // Validate warn threshold
        if self.warn_frame_bytes == 0 {
            errors.push("Warn frame bytes must be greater than 0".to_string());
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to log to console
    pub log_to_console: bool,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("genesis-protocol"),
            log_level: Level::INFO,
            log_to_console: true,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        // Validate app name
        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        // Warn if all output is disabled
        if !self.log_to_console {
            errors.push(
                "WARNING: Console logging is disabled - no log output will be produced"
                    .to_string(),
            );
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
