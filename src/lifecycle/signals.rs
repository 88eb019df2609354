//! OS signal handling.
//!
//! # Responsibilities
//! - Run the synchronous workload off the async runtime
//! - Race it against Ctrl-C (SIGINT)
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - An interrupt is a normal exit, not an error
//! - If the signal handler cannot be installed the workload still runs

use crate::lifecycle::startup::AppError;

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    Completed(Result<(), AppError>),
    Interrupted,
}

impl Outcome {
    /// 0 on success or interrupt, otherwise the error's code.
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Completed(Ok(())) | Outcome::Interrupted => 0,
            Outcome::Completed(Err(e)) => e.exit_code(),
        }
    }
}

/// Run `work` on a blocking thread until it finishes or Ctrl-C arrives.
pub async fn run_until_interrupted<F>(work: F) -> Outcome
where
    F: FnOnce() -> Result<(), AppError> + Send + 'static,
{
    let mut task = tokio::task::spawn_blocking(work);

    let signal = tokio::select! {
        joined = &mut task => return completed(joined),
        signal = tokio::signal::ctrl_c() => signal,
    };

    match signal {
        Ok(()) => {
            tracing::info!("Application interrupted by user");
            Outcome::Interrupted
        }
        Err(e) => {
            tracing::warn!(error = %e, "Unable to listen for Ctrl-C");
            completed(task.await)
        }
    }
}

fn completed(joined: Result<Result<(), AppError>, tokio::task::JoinError>) -> Outcome {
    match joined {
        Ok(result) => Outcome::Completed(result),
        Err(e) => Outcome::Completed(Err(AppError::Runtime(e.to_string()))),
    }
}
