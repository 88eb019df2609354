//! Greeting demo with input validation and rate limiting.

pub mod app_info;
pub mod config;
pub mod greeting;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::AppConfig;
pub use greeting::{Greeting, GreetingError, GreetingService};
pub use security::RateLimiter;
