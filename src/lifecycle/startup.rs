//! Startup orchestration.
//!
//! # Responsibilities
//! - Capture the environment, initialize logging, then validate configuration
//! - Build the services in dependency order
//! - Run the greeting demonstration requested on the command line
//!
//! # Design Decisions
//! - Fail fast: any configuration or validation error ends the run
//! - Services receive their rate limiter explicitly

use std::sync::Arc;
use thiserror::Error;

use crate::app_info::AppInfoService;
use crate::config::loader::{load_from_vars, read_environment, EnvSnapshot};
use crate::config::{AppConfig, ConfigError};
use crate::greeting::{GreetingError, GreetingService};
use crate::observability::logging;
use crate::security::RateLimiter;

/// Names greeted by `--list-greetings`.
pub const EXAMPLE_NAMES: [&str; 4] = ["Alice", "Bob", "Charlie", "Diana"];

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub name: String,
    pub verbose: bool,
    pub list_greetings: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            name: "Developer".to_string(),
            verbose: false,
            list_greetings: false,
        }
    }
}

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Greeting(#[from] GreetingError),

    #[error("Unexpected application error: {0}")]
    Runtime(String),
}

impl AppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Everything the demonstration produced, in the order it was logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demonstration {
    pub greeting: String,
    pub batch: Vec<String>,
    pub info: Vec<(&'static str, String)>,
}

/// Read the environment, start logging and run the demonstration.
pub fn run(options: &RunOptions) -> Result<(), AppError> {
    let env = read_environment()?;
    start(&env, options)
}

/// Run against an already captured environment.
///
/// Logging is installed from the unvalidated configuration first, so the
/// dotenv report, validation and sensitive-variable warnings all reach it.
pub fn start(env: &EnvSnapshot, options: &RunOptions) -> Result<(), AppError> {
    logging::init(&env.preliminary_config(), options.verbose);
    env.log_source();

    let config = load_from_vars(&env.vars)?;
    log_startup_info(&config);

    let limiter = Arc::new(RateLimiter::default());
    let greetings = GreetingService::new(&config, limiter);
    let app_info = AppInfoService::new(&config);

    demonstrate_features(&greetings, &app_info, options)?;

    tracing::info!("Application completed successfully");
    Ok(())
}

pub fn log_startup_info(config: &AppConfig) {
    tracing::info!("Starting application");
    tracing::info!(name = %config.app_name, version = %config.app_version, "App");
    tracing::info!(environment = %config.environment, "Environment");
    tracing::info!(min_rust_version = crate::app_info::service::min_rust_version(), "Rust");
    tracing::info!(platform = %crate::app_info::service::platform(), "Platform");
    if config.debug {
        tracing::info!("Debug mode enabled");
    }
    if let Ok(json) = serde_json::to_string(config) {
        tracing::debug!(config = %json, "Effective configuration");
    }
}

/// Greet `options.name`, optionally the example batch, then report app info.
pub fn demonstrate_features(
    greetings: &GreetingService,
    app_info: &AppInfoService,
    options: &RunOptions,
) -> Result<Demonstration, GreetingError> {
    tracing::info!("Example usage");

    let greeting = greetings.greet(&options.name)?.text;
    tracing::info!("{greeting}");

    let batch = if options.list_greetings {
        let batch = greetings.get_multiple_greetings(EXAMPLE_NAMES)?;
        tracing::info!("Multiple greetings:");
        for line in &batch {
            tracing::info!("  {line}");
        }
        batch
    } else {
        Vec::new()
    };

    let info = app_info.get_app_info().entries();
    tracing::info!("Application info:");
    for (label, value) in &info {
        tracing::info!("  {label}: {value}");
    }

    Ok(Demonstration { greeting, batch, info })
}
