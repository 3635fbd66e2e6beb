use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::OutputConfig;
use super::pacing::PacingConfig;
use super::query::QueryConfig;

const LOCAL_CONFIG_FILE: &str = "zonediff.toml";

/// Main configuration structure for zonediff
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Query timeouts and TTL handling
    #[serde(default)]
    pub query: QueryConfig,

    /// Diff rendering
    #[serde(default)]
    pub output: OutputConfig,

    /// Inter-record delay
    #[serde(default)]
    pub pacing: PacingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. zonediff.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_FILE).exists() {
            Self::from_file(LOCAL_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(timeout) = overrides.timeout_secs {
            self.query.timeout_secs = timeout;
        }
        if let Some(max_timeout) = overrides.max_timeout_secs {
            self.query.max_timeout_secs = max_timeout;
        }
        if overrides.ignore_ttl {
            self.query.ignore_ttl = true;
        }
        if overrides.color {
            self.output.color = true;
        }
        if let Some(delay) = overrides.max_delay_secs {
            self.pacing.max_delay_secs = Some(delay);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.query.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }

        if self.query.max_timeout_secs < self.query.timeout_secs {
            return Err(ConfigError::Validation(format!(
                "Maximum timeout ({}s) is below the initial timeout ({}s)",
                self.query.max_timeout_secs, self.query.timeout_secs
            )));
        }

        if let Some(delay) = self.pacing.max_delay_secs {
            if delay < 0.0 || Duration::try_from_secs_f64(delay).is_err() {
                return Err(ConfigError::Validation(format!(
                    "Delay must be a non-negative number of seconds, got {}",
                    delay
                )));
            }
        }

        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub timeout_secs: Option<u64>,
    pub max_timeout_secs: Option<u64>,
    pub ignore_ttl: bool,
    pub color: bool,
    pub max_delay_secs: Option<f64>,
    pub log_level: Option<String>,
}
