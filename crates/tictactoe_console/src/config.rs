//! Optional configuration file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a console session.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name shown for the computer player.
    #[serde(default = "default_computer_name")]
    computer_name: String,

    /// Seed for the computer player's generator; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Log filter used when `RUST_LOG` is not set (e.g. "warn", "debug").
    #[serde(default = "default_log_level")]
    log_level: String,
}

fn default_computer_name() -> String {
    "Computer".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            computer_name: default_computer_name(),
            seed: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(
            computer_name = %config.computer_name,
            seeded = config.seed.is_some(),
            "Config loaded"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.computer_name.trim().is_empty() {
            return Err(ConfigError::new("computer_name must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Replaces the seed when `seed` is given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
