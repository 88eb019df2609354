//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Read env → Init logging → Report env → Validate → Build services → Demonstrate
//!
//! Signals (signals.rs):
//!     SIGINT → Interrupted (exit 0)
//!
//! Exit codes:
//!     success / interrupt → 0
//!     configuration or validation error → 1
//! ```

pub mod signals;
pub mod startup;

pub use signals::{run_until_interrupted, Outcome};
pub use startup::{run, start, AppError, RunOptions};
