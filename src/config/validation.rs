//! Configuration validation.
//!
//! # Responsibilities
//! - Check log level and environment against their allowed sets
//! - Reject blank name and version
//! - Enforce `MAJOR.MINOR[.PATCH]` versions
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::config::schema::AppConfig;

pub const VALID_LOG_LEVELS: &[&str] = &["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"];

pub const VALID_ENVIRONMENTS: &[&str] = &["development", "staging", "production"];

static SEMVER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\d+\.\d+(\.\d+)?$").ok());

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid log_level '{0}'. Must be one of {levels}", levels = VALID_LOG_LEVELS.join(", "))]
    InvalidLogLevel(String),

    #[error("app_name cannot be empty")]
    EmptyAppName,

    #[error("app_version cannot be empty")]
    EmptyAppVersion,

    #[error("app_version must be in semantic version format (e.g., 1.0 or 1.0.0), got '{0}'")]
    InvalidVersion(String),

    #[error("Invalid environment '{0}'. Must be one of {environments}", environments = VALID_ENVIRONMENTS.join(", "))]
    InvalidEnvironment(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !VALID_LOG_LEVELS.contains(&config.log_level.to_uppercase().as_str()) {
        errors.push(ValidationError::InvalidLogLevel(config.log_level.clone()));
    }

    if config.app_name.trim().is_empty() {
        errors.push(ValidationError::EmptyAppName);
    }

    if config.app_version.trim().is_empty() {
        errors.push(ValidationError::EmptyAppVersion);
    } else if !is_semver(&config.app_version) {
        errors.push(ValidationError::InvalidVersion(config.app_version.clone()));
    }

    if !VALID_ENVIRONMENTS.contains(&config.environment.to_lowercase().as_str()) {
        errors.push(ValidationError::InvalidEnvironment(config.environment.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_semver(version: &str) -> bool {
    match &*SEMVER {
        Some(re) => re.is_match(version),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_case_insensitive_sets() {
        let config = AppConfig {
            log_level: "warning".to_string(),
            environment: "Staging".to_string(),
            ..AppConfig::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let config = AppConfig {
            log_level: "VERBOSE".to_string(),
            ..AppConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::InvalidLogLevel("VERBOSE".to_string())]);
        assert_eq!(
            errors[0].to_string(),
            "Invalid log_level 'VERBOSE'. Must be one of DEBUG, INFO, WARNING, ERROR, CRITICAL"
        );
    }

    #[test]
    fn test_versions() {
        for ok in ["1.0", "1.0.0", "10.20.30"] {
            let config = AppConfig {
                app_version: ok.to_string(),
                ..AppConfig::default()
            };
            assert!(validate_config(&config).is_ok(), "{ok} should be accepted");
        }

        for bad in ["1", "1.0.0.0", "v1.0", "1.0-beta"] {
            let config = AppConfig {
                app_version: bad.to_string(),
                ..AppConfig::default()
            };
            assert_eq!(
                validate_config(&config).unwrap_err(),
                vec![ValidationError::InvalidVersion(bad.to_string())]
            );
        }
    }

    #[test]
    fn test_blank_fields() {
        let config = AppConfig {
            app_name: "   ".to_string(),
            app_version: "".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::EmptyAppName, ValidationError::EmptyAppVersion]
        );
    }

    #[test]
    fn test_collects_all_errors() {
        let config = AppConfig {
            app_name: "Demo".to_string(),
            app_version: "one".to_string(),
            environment: "qa".to_string(),
            debug: false,
            log_level: "LOUD".to_string(),
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors[2].to_string(),
            "Invalid environment 'qa'. Must be one of development, staging, production"
        );
    }
}
