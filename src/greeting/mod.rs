//! Greeting subsystem.
//!
//! # Data Flow
//! ```text
//! name
//!     → service.rs (rate limit on the shared identifier)
//!     → validation.rs (name policy, sanitization)
//!     → service.rs (format "Hello, {name}! Welcome to {app}")
//!     → Greeting / GreetingError, logged either way
//! ```

pub mod service;
pub mod types;
pub mod validation;

pub use service::{GreetingService, GREET_IDENTIFIER};
pub use types::{Greeting, GreetingError, GreetingResult};
pub use validation::{validate_name, MAX_NAME_LENGTH};
