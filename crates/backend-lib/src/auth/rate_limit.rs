// ============================
// schoolhub-backend-lib/src/auth/rate_limit.rs
// ============================
//! Login attempt rate limiting.
use dashmap::DashMap;
use std::time::{Duration, Instant};

use crate::error::AppError;

/// Sliding-window limiter keyed by login identifier.
///
/// Counts attempts per window; a successful login resets the window for
/// that identifier. Keyed by login rather than client address so a
/// single account cannot be brute-forced from many sources.
pub struct LoginRateLimiter {
    window: Duration,
    max_attempts: u32,
    attempts: DashMap<String, AttemptWindow>,
}

#[derive(Debug)]
struct AttemptWindow {
    count: u32,
    window_start: Instant,
}

impl LoginRateLimiter {
    pub fn new(window: Duration, max_attempts: u32) -> Self {
        Self {
            window,
            max_attempts,
            attempts: DashMap::new(),
        }
    }

    /// Record an attempt for this login and reject once the window
    /// ceiling is reached.
    pub fn check(&self, login: &str) -> Result<(), AppError> {
        let mut entry = self
            .attempts
            .entry(login.to_string())
            .or_insert_with(|| AttemptWindow {
                count: 0,
                window_start: Instant::now(),
            });

        if entry.window_start.elapsed() > self.window {
            entry.count = 0;
            entry.window_start = Instant::now();
        }

        if entry.count >= self.max_attempts {
            return Err(AppError::AuthRateLimited);
        }

        entry.count += 1;
        Ok(())
    }

    /// Clear the window after a successful authentication.
    pub fn reset(&self, login: &str) {
        self.attempts.remove(login);
    }
}
