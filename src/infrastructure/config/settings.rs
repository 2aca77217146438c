//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; the Telegram bot token is read
//! from the environment only.
//!
//! # Example
//!
//! ```no_run
//! use evcalc::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::kelly::KellyConfig;
use super::logging::LoggingConfig;
use super::telegram::TelegramAppConfig;
use crate::error::{ConfigError, Result};

/// Default configuration file name, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Main application configuration.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Kelly staking settings.
    #[serde(default)]
    pub kelly: KellyConfig,

    /// Telegram bot configuration.
    #[serde(default)]
    pub telegram: TelegramAppConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is invalid.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.kelly.bankroll <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "bankroll",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        if !self.logging.level_is_valid() {
            return Err(ConfigError::InvalidValue {
                field: "level",
                reason: format!("`{}` is not a valid log filter", self.logging.level),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::infrastructure::config::logging::LogFormat;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.kelly.bankroll, dec!(100));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.telegram.enabled);
    }

    #[test]
    fn full_file_parses() {
        let config = Config::parse_toml(
            r#"
[logging]
level = "evcalc=debug"
format = "json"

[kelly]
bankroll = 250.5

[telegram]
enabled = false
register_commands = false
"#,
        )
        .unwrap();

        assert_eq!(config.kelly.bankroll, dec!(250.5));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(!config.telegram.enabled);
        assert!(!config.telegram.register_commands);
    }

    #[test]
    fn rejects_non_positive_bankroll() {
        let result = Config::parse_toml("[kelly]\nbankroll = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "bankroll",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = Config::parse_toml("[logging]\nformat = \"xml\"\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn rejects_blank_level() {
        let result = Config::parse_toml("[logging]\nlevel = \"\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "level" }))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_or_default("definitely/not/here/config.toml").unwrap();
        assert_eq!(config.kelly.bankroll, dec!(100));
    }

    #[test]
    fn load_reports_missing_file() {
        let result = Config::load("definitely/not/here/config.toml");
        assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
    }
}
