//! Shared fixtures for integration tests.

use std::sync::Arc;

use greeter::security::{ManualClock, RateLimiter};
use greeter::{AppConfig, GreetingService};

/// A greeting service whose limiter runs on a manual clock.
pub fn service_with_clock(
    app_name: &str,
    window_ms: u64,
    max_requests: u32,
) -> (GreetingService, Arc<ManualClock>) {
    let config = AppConfig {
        app_name: app_name.to_string(),
        ..AppConfig::default()
    };
    let clock = Arc::new(ManualClock::new(1_000_000));
    let limiter = RateLimiter::with_clock(window_ms, max_requests, clock.clone());
    (GreetingService::new(&config, Arc::new(limiter)), clock)
}
