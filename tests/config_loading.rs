//! Configuration loading against real dotenv files.
//!
//! These tests touch the process environment, so every variable they use
//! is unique to this file.

use std::collections::BTreeMap;
use std::io::Write;

use greeter::config::loader::{load_env_file, load_from_vars, EnvFileStatus};
use greeter::config::{ConfigError, ValidationError};

#[test]
fn test_env_file_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "GREETER_TEST_FROM_DOTENV=loaded").unwrap();

    assert_eq!(load_env_file(&path), EnvFileStatus::Loaded);
    assert_eq!(
        std::env::var("GREETER_TEST_FROM_DOTENV").as_deref(),
        Ok("loaded")
    );
}

#[test]
fn test_malformed_env_file_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "GREETER_TEST_BROKEN value without equals\n").unwrap();

    assert!(matches!(load_env_file(&path), EnvFileStatus::Failed(_)));
}

#[test]
fn test_invalid_configuration_is_reported() {
    let vars: BTreeMap<String, String> = [("APP_VERSION", "latest"), ("APP_NAME", "")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    match load_from_vars(&vars) {
        Err(ConfigError::Validation(errors)) => assert_eq!(
            errors,
            vec![
                ValidationError::EmptyAppName,
                ValidationError::InvalidVersion("latest".to_string()),
            ]
        ),
        other => panic!("expected validation failure, got {other:?}"),
    }
}
