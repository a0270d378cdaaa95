// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cancellable retry timer
//!
//! Holds at most one pending timer. Scheduling replaces whatever was
//! pending, so a burst of rejected notifications never stacks retries.

use std::pin::Pin;
use std::time::Duration;
use tokio::time::Sleep;

struct PendingTimer {
    id: String,
    sleep: Pin<Box<Sleep>>,
}

/// Single-slot timer driven from a `tokio::select!` loop
#[derive(Default)]
pub struct RetryTimer {
    pending: Option<PendingTimer>,
}

impl RetryTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer, replacing any pending one
    pub fn schedule(&mut self, id: impl Into<String>, duration: Duration) {
        self.pending = Some(PendingTimer {
            id: id.into(),
            sleep: Box::pin(tokio::time::sleep(duration)),
        });
    }

    /// Disarm the pending timer if it carries `id`
    pub fn cancel(&mut self, id: &str) -> bool {
        if self.pending.as_ref().is_some_and(|t| t.id == id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_ref().map(|t| t.id.as_str())
    }

    /// Resolve with the timer id once the pending timer elapses
    ///
    /// Never resolves while nothing is pending. Cancel safe: dropping the
    /// future leaves the timer armed.
    pub async fn fired(&mut self) -> String {
        let Some(timer) = self.pending.as_mut() else {
            return std::future::pending().await;
        };
        timer.sleep.as_mut().await;
        self.pending.take().map(|t| t.id).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
