//! Infrastructure layer for quiz-model
//!
//! This crate wires the domain model to its environment: loading validation
//! limits from configuration files and environment variables, and installing
//! the `tracing` subscriber.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig, FileLoggingConfig};
pub use logging::LoggingError;
