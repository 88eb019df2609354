//! Input sanitization.
//!
//! # Pipeline
//! ```text
//! raw input
//!     → trim surrounding whitespace
//!     → drop ASCII control characters (0x00-0x1F, 0x7F)
//!     → drop <script>...</script> blocks
//!     → drop remaining tags (optional)
//!     → truncate to max length (optional)
//! ```
//!
//! Stripping is regex based and best-effort. It does not parse HTML and the
//! output is not escaped, so it must not be treated as safe markup.

use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_BLOCK: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script>").ok());

static HTML_TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[^>]*>").ok());

/// Sanitize user-supplied text.
///
/// `max_length` counts characters, not bytes; `None` or `Some(0)` leaves
/// the length alone.
pub fn sanitize(input: &str, max_length: Option<usize>, strip_html: bool) -> String {
    let mut sanitized: String = input
        .trim()
        .chars()
        .filter(|c| !c.is_ascii_control())
        .collect();

    if let Some(re) = &*SCRIPT_BLOCK {
        sanitized = re.replace_all(&sanitized, "").into_owned();
    }

    if strip_html {
        if let Some(re) = &*HTML_TAG {
            sanitized = re.replace_all(&sanitized, "").into_owned();
        }
    }

    match max_length {
        Some(max) if max > 0 && sanitized.chars().count() > max => {
            sanitized.chars().take(max).collect()
        }
        _ => sanitized,
    }
}
