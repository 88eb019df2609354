//! Sliding-window rate limiter keyed by identifier.

use std::sync::Arc;
use dashmap::DashMap;

use crate::security::clock::{Clock, SystemClock};

/// Per-identifier request counter over a trailing time window.
///
/// Each identifier keeps the arrival times (ms) of its admitted requests.
/// Entries older than the window are pruned on every access. The
/// read-prune-append sequence runs under the identifier's map entry lock,
/// so concurrent callers cannot both slip past the limit.
#[derive(Debug)]
pub struct RateLimiter {
    requests: DashMap<String, Vec<u64>>,
    window_ms: u64,
    max_requests: u32,
    clock: Arc<dyn Clock>,
}

impl RateLimiter {
    /// Fifteen minutes.
    pub const DEFAULT_WINDOW_MS: u64 = 900_000;
    pub const DEFAULT_MAX_REQUESTS: u32 = 100;

    pub fn new(window_ms: u64, max_requests: u32) -> Self {
        Self::with_clock(window_ms, max_requests, Arc::new(SystemClock))
    }

    pub fn with_clock(window_ms: u64, max_requests: u32, clock: Arc<dyn Clock>) -> Self {
        Self {
            requests: DashMap::new(),
            window_ms,
            max_requests,
            clock,
        }
    }

    /// Check whether a request from `identifier` is admitted.
    ///
    /// An admitted request is recorded; a rejected one is not.
    pub fn is_allowed(&self, identifier: &str) -> bool {
        let now = self.clock.now_ms();
        let mut timestamps = self.requests.entry(identifier.to_string()).or_default();

        timestamps.retain(|&t| self.in_window(t, now));

        if timestamps.len() >= self.max_requests as usize {
            tracing::debug!(
                identifier,
                window_ms = self.window_ms,
                max_requests = self.max_requests,
                "Rate limit reached"
            );
            return false;
        }

        timestamps.push(now);
        true
    }

    /// Requests `identifier` may still make in the current window.
    /// Does not record anything.
    pub fn get_remaining_requests(&self, identifier: &str) -> u32 {
        let now = self.clock.now_ms();
        let used = self
            .requests
            .get(identifier)
            .map(|timestamps| timestamps.iter().filter(|&&t| self.in_window(t, now)).count())
            .unwrap_or(0);

        (self.max_requests as usize).saturating_sub(used) as u32
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    /// Number of identifiers with stored state.
    pub fn tracked_identifiers(&self) -> usize {
        self.requests.len()
    }

    // Before the first full window has elapsed every timestamp is in range.
    fn in_window(&self, timestamp: u64, now: u64) -> bool {
        match now.checked_sub(self.window_ms) {
            Some(window_start) => timestamp > window_start,
            None => true,
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW_MS, Self::DEFAULT_MAX_REQUESTS)
    }
}
