//! Configuration loading for quiz-model
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUIZ_*` environment variables (`__` separates nested keys)
//! 2. Explicitly specified file
//! 3. Project root: `./quiz.toml` or `./.quiz.toml`
//! 4. Global config: `<config dir>/quiz-model/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigError, FileConfig, FileLoggingConfig};
pub use loader::ConfigLoader;
