//! Greeting generation.

use std::sync::Arc;
use serde_json::Value;

use crate::config::AppConfig;
use crate::greeting::types::{Greeting, GreetingError, GreetingResult};
use crate::greeting::validation::validate_name;
use crate::security::RateLimiter;

/// Rate-limit identifier shared by every greeting request.
pub const GREET_IDENTIFIER: &str = "greet_function";

/// Validates names and formats personalised greetings.
#[derive(Debug, Clone)]
pub struct GreetingService {
    app_name: String,
    limiter: Arc<RateLimiter>,
}

impl GreetingService {
    pub fn new(config: &AppConfig, limiter: Arc<RateLimiter>) -> Self {
        Self {
            app_name: config.app_name.clone(),
            limiter,
        }
    }

    /// Greet a single name.
    ///
    /// Every call consumes a rate-limit slot, including calls that are
    /// later rejected by validation.
    pub fn greet(&self, name: &str) -> GreetingResult<Greeting> {
        let result = self.admit().and_then(|()| self.build(name));
        self.record(result)
    }

    /// Greet an untyped value; anything but a JSON string is rejected.
    pub fn greet_value(&self, value: &Value) -> GreetingResult<Greeting> {
        let result = self.admit().and_then(|()| match value {
            Value::String(name) => self.build(name),
            _ => Err(GreetingError::NotAString),
        });
        self.record(result)
    }

    /// Greet every name in order. The first invalid name fails the whole
    /// batch and no greetings are returned.
    pub fn get_multiple_greetings<I, S>(&self, names: I) -> GreetingResult<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.greet(name.as_ref()).map(|g| g.text))
            .collect()
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    fn admit(&self) -> GreetingResult<()> {
        if self.limiter.is_allowed(GREET_IDENTIFIER) {
            Ok(())
        } else {
            Err(GreetingError::RateLimited)
        }
    }

    fn build(&self, name: &str) -> GreetingResult<Greeting> {
        let sanitized_name = validate_name(name)?;
        Ok(Greeting {
            text: format!("Hello, {}! Welcome to {}", sanitized_name, self.app_name),
            sanitized_name,
        })
    }

    fn record(&self, result: GreetingResult<Greeting>) -> GreetingResult<Greeting> {
        match &result {
            Ok(greeting) => tracing::info!(name = %greeting.sanitized_name, "Generated greeting"),
            Err(e) => tracing::warn!(error = %e, "Greeting rejected"),
        }
        result
    }
}
