//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (greetings, rejections, config warnings)
//!
//! Consumers (logging.rs):
//!     → stdout
//!     → app.log (outside debug mode)
//! ```

pub mod logging;

#[cfg(test)]
pub(crate) mod capture;
