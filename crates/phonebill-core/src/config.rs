//! Application configuration
//!
//! This module provides centralized configuration management using the `config` crate.
//! Only ambient settings live here; the tariff is fixed and never loaded from config.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub log: LogConfig,
}

/// Log output format
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// Default filter directive when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for log lines on stderr
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional config files
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        Self::load_from(Path::new("config"), &run_mode)
    }

    /// Load configuration with `dir` as the config file directory
    ///
    /// Layers built-in defaults, `<dir>/default`, `<dir>/<run_mode>` (both
    /// optional, any format the `config` crate recognises), then
    /// `PHONEBILL__*` environment variables.
    pub fn load_from(dir: &Path, run_mode: &str) -> Result<Self, ConfigError> {
        let default_file = dir.join("default");
        let mode_file = dir.join(run_mode);

        let config = Config::builder()
            .set_default("log.level", default_log_level())?
            .set_default("log.format", "pretty")?
            .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(File::with_name(&mode_file.to_string_lossy()).required(false))
            // PHONEBILL__LOG__LEVEL=debug
            .add_source(
                Environment::with_prefix("PHONEBILL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
