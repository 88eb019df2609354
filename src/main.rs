//! Greeter command-line entry point.
//!
//! # Architecture Overview
//!
//! ```text
//!   CLI args ──▶ lifecycle::startup ──▶ config (env + .env) ──▶ validation
//!                      │
//!                      ▼
//!               observability::logging
//!                      │
//!                      ▼
//!   stdout ◀── greeting::service ──▶ security::rate_limit
//!   app.log           │
//!                      └──▶ greeting::validation ──▶ security::sanitize
//! ```

use std::process::ExitCode;
use clap::Parser;

use greeter::lifecycle::{self, Outcome, RunOptions};
use greeter::observability::logging;

#[derive(Parser, Debug)]
#[command(name = "greeter")]
#[command(version)]
#[command(about = "Greets a name after validating and rate limiting it", long_about = None)]
struct Cli {
    /// Name to greet
    #[arg(short, long, default_value = "Developer")]
    name: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show multiple greeting examples
    #[arg(long)]
    list_greetings: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = RunOptions {
        name: cli.name,
        verbose: cli.verbose,
        list_greetings: cli.list_greetings,
    };

    let outcome = lifecycle::run_until_interrupted(move || lifecycle::run(&options)).await;

    if let Outcome::Completed(Err(e)) = &outcome {
        // No-op when logging came up; covers failures before `start` ran.
        logging::init_fallback();
        tracing::error!(error = %e, "Application failed");
    }

    let code = outcome.exit_code();
    if matches!(outcome, Outcome::Interrupted) {
        // The blocking task may still be running; skip runtime shutdown.
        std::process::exit(i32::from(code));
    }
    ExitCode::from(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["greeter"]);
        assert_eq!(cli.name, "Developer");
        assert!(!cli.verbose);
        assert!(!cli.list_greetings);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["greeter", "-n", "Alice", "-v", "--list-greetings"]);
        assert_eq!(cli.name, "Alice");
        assert!(cli.verbose);
        assert!(cli.list_greetings);

        let cli = Cli::parse_from(["greeter", "--name", "Bob"]);
        assert_eq!(cli.name, "Bob");
    }
}
