//! Heuristic detection of secrets in configuration values.
//!
//! Warning-only: false positives and false negatives are expected.

use regex::Regex;
use std::sync::LazyLock;

const SENSITIVE_KEYS: &[&str] = &["password", "secret", "key", "token", "credential"];

const VALUE_INDICATORS: &[&str] = &["secret", "password", "token", "key"];

static BASE64_LIKE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+/=]{20,}$").ok());

static HEX_HASH: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-f0-9]{32,}$").ok());

/// Returns true if the key/value pair looks like it carries a secret.
pub fn is_sensitive(key: &str, value: &str) -> bool {
    let lower_key = key.to_lowercase();
    if SENSITIVE_KEYS.iter().any(|s| lower_key.contains(s)) {
        return true;
    }

    let shaped_like_secret = [&*BASE64_LIKE, &*HEX_HASH]
        .into_iter()
        .flatten()
        .any(|re| re.is_match(value));
    if shaped_like_secret {
        return true;
    }

    let lower_value = value.to_lowercase();
    VALUE_INDICATORS.iter().any(|s| lower_value.contains(s))
}
