//! Configuration loading from the environment.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::security::is_sensitive;

/// Name of the optional dotenv file, resolved against the working directory.
pub const ENV_FILE: &str = ".env";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file access error: {0}")]
    WorkingDir(#[source] std::io::Error),

    #[error("Configuration validation error: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome of looking for a dotenv file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileStatus {
    Missing,
    Loaded,
    Failed(String),
}

/// How the environment was assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvSource {
    /// CI run: the process environment is used as is.
    Ci,
    DotEnv { path: PathBuf, status: EnvFileStatus },
}

/// Process variables captured after the dotenv file has been applied.
#[derive(Debug, Clone)]
pub struct EnvSnapshot {
    pub source: EnvSource,
    pub vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Unvalidated configuration, enough to set up logging.
    pub fn preliminary_config(&self) -> AppConfig {
        AppConfig::from_vars(self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Report how the environment was assembled. Call once logging is up.
    pub fn log_source(&self) {
        match &self.source {
            EnvSource::Ci => {
                tracing::info!("Running in CI environment, using environment variables directly")
            }
            EnvSource::DotEnv { path, status } => match status {
                EnvFileStatus::Missing => tracing::warn!(
                    path = %path.display(),
                    ".env file not found, using environment variables"
                ),
                EnvFileStatus::Loaded => {
                    tracing::info!(path = %path.display(), ".env file loaded successfully")
                }
                EnvFileStatus::Failed(e) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load .env file, falling back to environment variables"
                ),
            },
        }
    }
}

/// Capture the process environment.
///
/// Outside CI the `.env` file in the working directory is applied first;
/// variables already present in the environment take precedence over it.
/// Nothing is logged here, since logging depends on the result.
pub fn read_environment() -> Result<EnvSnapshot, ConfigError> {
    let source = if is_ci_environment(&process_vars()) {
        EnvSource::Ci
    } else {
        let cwd = std::env::current_dir().map_err(ConfigError::WorkingDir)?;
        let path = cwd.join(ENV_FILE);
        let status = load_env_file(&path);
        EnvSource::DotEnv { path, status }
    };

    Ok(EnvSnapshot {
        source,
        vars: process_vars(),
    })
}

/// Read, validate and scan the process configuration.
///
/// Assumes logging is already installed; see `lifecycle::startup::start` for
/// the order used by the CLI.
pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let env = read_environment()?;
    env.log_source();
    load_from_vars(&env.vars)
}

/// Build and validate a configuration from an explicit variable set, then
/// warn about every variable that looks like it holds a secret.
pub fn load_from_vars(vars: &BTreeMap<String, String>) -> Result<AppConfig, ConfigError> {
    let config = AppConfig::from_vars(vars.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    validate_config(&config).map_err(ConfigError::Validation)?;

    for key in sensitive_variables(vars) {
        tracing::warn!(
            variable = key,
            "Potential sensitive information detected in environment variable"
        );
        tracing::warn!("Use secure vaults or encrypted storage for sensitive data");
    }

    Ok(config)
}

/// `NODE_ENV=production` or `CI=true`.
pub fn is_ci_environment(vars: &BTreeMap<String, String>) -> bool {
    vars.get("NODE_ENV").is_some_and(|v| v == "production")
        || vars.get("CI").is_some_and(|v| v == "true")
}

/// Apply a dotenv file to the process environment.
///
/// Never fatal: a missing or unreadable file is reported in the status.
pub fn load_env_file(path: &Path) -> EnvFileStatus {
    if !path.exists() {
        return EnvFileStatus::Missing;
    }

    match dotenv::from_path(path) {
        Ok(()) => EnvFileStatus::Loaded,
        Err(e) => EnvFileStatus::Failed(e.to_string()),
    }
}

/// Keys (never values) of variables that look sensitive, in key order.
pub fn sensitive_variables(vars: &BTreeMap<String, String>) -> Vec<&str> {
    vars.iter()
        .filter(|(k, v)| is_sensitive(k, v))
        .map(|(k, _)| k.as_str())
        .collect()
}

// Non-UTF-8 variables are skipped.
fn process_vars() -> BTreeMap<String, String> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
