//! Configuration schema definitions.
//!
//! Every field maps to one environment variable and has a default, so an
//! empty environment still yields a usable configuration.

use std::collections::HashMap;
use serde::Serialize;

pub const ENV_APP_NAME: &str = "APP_NAME";
pub const ENV_APP_VERSION: &str = "APP_VERSION";
pub const ENV_APP_ENV: &str = "APP_ENV";
pub const ENV_DEBUG: &str = "DEBUG";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Root configuration for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    /// Display name used in greetings (`APP_NAME`).
    pub app_name: String,

    /// Semantic version, `1.0` or `1.0.0` (`APP_VERSION`).
    pub app_version: String,

    /// development, staging or production (`APP_ENV`).
    pub environment: String,

    /// Debug mode (`DEBUG`); only a case-insensitive "true" enables it.
    pub debug: bool,

    /// DEBUG, INFO, WARNING, ERROR or CRITICAL (`LOG_LEVEL`).
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Project Template".to_string(),
            app_version: "1.0.0".to_string(),
            environment: "development".to_string(),
            debug: false,
            log_level: "INFO".to_string(),
        }
    }
}

impl AppConfig {
    /// Build a configuration from an explicit set of variables.
    ///
    /// Missing variables fall back to defaults. No validation happens here.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let defaults = Self::default();

        Self {
            app_name: vars.remove(ENV_APP_NAME).unwrap_or(defaults.app_name),
            app_version: vars.remove(ENV_APP_VERSION).unwrap_or(defaults.app_version),
            environment: vars.remove(ENV_APP_ENV).unwrap_or(defaults.environment),
            debug: vars
                .remove(ENV_DEBUG)
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(defaults.debug),
            log_level: vars.remove(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
        }
    }
}
