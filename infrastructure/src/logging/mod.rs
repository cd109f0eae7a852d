//! Logging infrastructure — `tracing` subscriber setup.
//!
//! The domain crate only emits events; this module decides where they go.
//! [`init`] installs a formatting subscriber filtered by `RUST_LOG` when set,
//! otherwise by the configured level.

use crate::config::FileLoggingConfig;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Logging setup errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter '{directives}': {reason}")]
    InvalidFilter { directives: String, reason: String },

    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Build the filter: `RUST_LOG` if set and non-empty, else the configured level
pub fn build_filter(config: &FileLoggingConfig) -> Result<EnvFilter, LoggingError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    parse_filter(&select_directives(rust_log, config))
}

/// Install the global subscriber
///
/// Fails if a global subscriber has already been set.
pub fn init(config: &FileLoggingConfig) -> Result<(), LoggingError> {
    let filter = build_filter(config)?;
    let directives = filter.to_string();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.show_target)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    tracing::info!("Logging initialized with filter '{}'", directives);
    Ok(())
}

fn select_directives(rust_log: Option<String>, config: &FileLoggingConfig) -> String {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ => config.level.clone(),
    }
}

fn parse_filter(directives: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directives).map_err(|e| LoggingError::InvalidFilter {
        directives: directives.to_string(),
        reason: e.to_string(),
    })
}
