//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use quiz_domain::{LimitsError, QuestionLimits};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("invalid question limits: {0}")]
    InvalidLimits(#[from] LimitsError),

    #[error("logging.level cannot be empty")]
    EmptyLogLevel,
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Filter directives, e.g. `"info"` or `"quiz_domain=debug"`
    pub level: String,
    /// Include the event target in log lines
    pub show_target: bool,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            show_target: false,
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Validation limits for questions and choices
    pub limits: QuestionLimits,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.limits.validate()?;

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::EmptyLogLevel);
        }

        Ok(())
    }
}
