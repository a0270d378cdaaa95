// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Throttled reporting of rejection reasons
//!
//! While a condition keeps rejecting, the gate re-polls every few hundred
//! milliseconds. The reporter remembers when the current streak started and
//! only lets a reason through once the quiet interval has elapsed.

use crate::config::FALSE_CONDITION_PRINT_INTERVAL;
use std::time::{Duration, Instant};

/// Tracks a rejection streak and decides when its reason may be logged
#[derive(Debug, Clone)]
pub struct ThrottledReporter {
    interval: Duration,
    window_start: Option<Instant>,
}

impl Default for ThrottledReporter {
    fn default() -> Self {
        Self::new(FALSE_CONDITION_PRINT_INTERVAL)
    }
}

impl ThrottledReporter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_start: None,
        }
    }

    /// Record a rejection at `now`
    ///
    /// Returns the message to log, if any. The first rejection of a streak
    /// only opens the window and never produces a message.
    pub fn on_rejection(&mut self, reasons: &[String], now: Instant) -> Option<String> {
        let start = *self.window_start.get_or_insert(now);

        if now.saturating_duration_since(start) <= self.interval {
            return None;
        }

        self.window_start = Some(now);
        if reasons.is_empty() {
            None
        } else {
            Some(reasons.join("\n"))
        }
    }

    /// End the current streak
    pub fn reset(&mut self) {
        self.window_start = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.window_start.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
