//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; every section is optional and
//! falls back to defaults. `BULLPEN_API_URL` overrides the provider URL.
//!
//! # Example
//!
//! ```no_run
//! use bullpen::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("bullpen.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;

use super::logging::LoggingConfig;
use super::provider::ProviderConfig;
use super::table::TableConfig;
use crate::error::{ConfigError, Result};

/// Environment variable that overrides [`ProviderConfig::api_url`].
pub const API_URL_ENV: &str = "BULLPEN_API_URL";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Table shape: window sizes, no-data marker, game filter.
    #[serde(default)]
    pub table: TableConfig,

    /// Statistics provider connection settings.
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] for an existing file.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse_toml(&content),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let mut config = Self::default();
                config.apply_env_overrides();
                config.validate()?;
                Ok(config)
            }
            Err(err) => Err(ConfigError::ReadFile(err).into()),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.provider.api_url = url.trim().to_string();
            }
        }
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.provider.api_url.is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if self.provider.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.provider.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        let table = &self.table;
        if table.no_pitches.is_empty() {
            return Err(ConfigError::MissingField {
                field: "no_pitches",
            }
            .into());
        }
        if table.last_short == 0 {
            return Err(ConfigError::InvalidValue {
                field: "last_short",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if table.last_short >= table.last_long {
            return Err(ConfigError::InvalidValue {
                field: "last_long",
                reason: "must be greater than last_short".to_string(),
            }
            .into());
        }
        if table.last_long >= table.num_days as usize {
            return Err(ConfigError::InvalidValue {
                field: "num_days",
                reason: "must be greater than last_long".to_string(),
            }
            .into());
        }
        if table.position_code.is_empty() {
            return Err(ConfigError::MissingField {
                field: "position_code",
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging with this configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
