//! Greeting result and error types.

use std::fmt;
use thiserror::Error;

/// Reasons a greeting request is refused.
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GreetingError {
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Name must be a string")]
    NotAString,

    #[error("Name cannot be empty")]
    Empty,

    #[error("Name must be between 1 and {max} characters long")]
    Length { max: usize },

    #[error("Name cannot contain newlines or tabs")]
    ForbiddenWhitespace,

    #[error("Name cannot be empty after sanitization")]
    EmptyAfterSanitization,

    #[error("Name can only contain letters, spaces, hyphens, and apostrophes")]
    Charset,
}

/// Result type for greeting operations.
pub type GreetingResult<T> = Result<T, GreetingError>;

/// A successfully produced greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    /// Full greeting text.
    pub text: String,
    /// The name after sanitization, as it appears in `text`.
    pub sanitized_name: String,
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
