//! Name policy for greetings.
//!
//! # Check Order
//! ```text
//! raw name
//!     → not blank
//!     → at most MAX_NAME_LENGTH characters (raw, before sanitizing)
//!     → no '\n' or '\t'
//!     → sanitize (HTML stripped, truncated)
//!     → not empty after sanitizing
//!     → only [A-Za-z], space, '-' and '\''
//! ```
//!
//! Error messages depend on this order, so it must not change.

use crate::greeting::types::{GreetingError, GreetingResult};
use crate::security::sanitize;

/// Longest name accepted, in characters.
pub const MAX_NAME_LENGTH: usize = 50;

/// Validate a raw name and return its sanitized form.
pub fn validate_name(name: &str) -> GreetingResult<String> {
    if name.trim().is_empty() {
        return Err(GreetingError::Empty);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(GreetingError::Length { max: MAX_NAME_LENGTH });
    }

    if name.contains(['\n', '\t']) {
        return Err(GreetingError::ForbiddenWhitespace);
    }

    let sanitized = sanitize(name, Some(MAX_NAME_LENGTH), true);

    if sanitized.is_empty() {
        return Err(GreetingError::EmptyAfterSanitization);
    }

    if !sanitized.chars().all(is_name_char) {
        return Err(GreetingError::Charset);
    }

    Ok(sanitized)
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, ' ' | '-' | '\'')
}
