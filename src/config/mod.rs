//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (+ optional .env file)
//!     → loader.rs (CI detection, dotenv, variable collection)
//!     → schema.rs (AppConfig with defaults)
//!     → validation.rs (semantic checks)
//!     → sensitive-variable scan (warnings only)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow an empty environment
//! - Loading from an explicit variable set keeps tests off the process env

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_configuration, ConfigError};
pub use schema::AppConfig;
pub use validation::{validate_config, ValidationError};
