//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber from configuration
//! - Mirror events to `app.log` outside debug mode
//! - Map configured level names onto tracing filter directives
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the configured level; `--verbose` overrides both
//! - Initialization never fails the application; a second call is a no-op

use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Log file written to the working directory when not in debug mode.
pub const LOG_FILE: &str = "app.log";

/// Translate a configured log level into a filter directive.
pub fn level_directive(log_level: &str) -> &'static str {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "WARNING" => "warn",
        "ERROR" | "CRITICAL" => "error",
        _ => "info",
    }
}

/// Install the global subscriber for `config`.
///
/// Returns false if a subscriber was already installed.
pub fn init(config: &AppConfig, verbose: bool) -> bool {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level_directive(&config.log_level)))
    };

    let mut file_error = None;
    let file_layer = if config.debug {
        None
    } else {
        match OpenOptions::new().create(true).append(true).open(LOG_FILE) {
            Ok(file) => Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file))),
            Err(e) => {
                file_error = Some(e);
                None
            }
        }
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .is_ok();

    if let Some(e) = file_error {
        tracing::warn!(path = LOG_FILE, error = %e, "Could not open log file, logging to stdout only");
    }

    installed
}

/// Stdout-only subscriber at the default level, for errors raised before
/// configuration is available.
pub fn init_fallback() -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}
