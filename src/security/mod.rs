//! Input validation and admission control.
//!
//! # Data Flow
//! ```text
//! User-supplied name:
//!     → rate_limit.rs (per-identifier sliding window)
//!     → sanitize.rs (strip control chars, scripts, tags; truncate)
//!     → greeting policy checks
//!
//! Configuration load:
//!     → sensitive.rs (flag secret-looking variables, warn only)
//! ```
//!
//! # Design Decisions
//! - Rate limiter is an owned instance, never a process-wide singleton
//! - Time is injected through `Clock` so windows can be tested
//! - Stripping is best-effort and is not a security boundary

pub mod clock;
pub mod rate_limit;
pub mod sanitize;
pub mod sensitive;

pub use clock::{Clock, ManualClock, SystemClock};
pub use rate_limit::RateLimiter;
pub use sanitize::sanitize;
pub use sensitive::is_sensitive;
