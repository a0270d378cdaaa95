// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-time startup barrier
//!
//! Before the first build of a watch session, the condition is polled with
//! empty change and removal sets until it accepts. Later runs of the same
//! session pass straight through.

use crate::change_set::ChangeSet;
use crate::clock::Clock;
use crate::gate::{Gate, GateCheck};
use std::time::Duration;

/// What the caller should do after polling the startup gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupStep {
    /// The barrier was passed earlier; nothing was evaluated
    Passed,
    /// The condition accepted just now
    Ready,
    /// Rejected: log `log` if present, suspend for `delay`, then poll again
    Retry {
        delay: Duration,
        log: Option<String>,
    },
}

/// Startup barrier state for one watch session
#[derive(Debug, Clone, Default)]
pub struct StartupGate {
    passed: bool,
    attempts: u32,
}

impl StartupGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_passed(&self) -> bool {
        self.passed
    }

    /// Number of evaluations made so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn poll<C: Clock>(&mut self, gate: &mut Gate<C>) -> StartupStep {
        if self.passed {
            return StartupStep::Passed;
        }

        self.attempts += 1;
        match gate.check(&ChangeSet::new(), &ChangeSet::new()) {
            GateCheck::Accepted => {
                self.passed = true;
                StartupStep::Ready
            }
            GateCheck::Rejected { log } => StartupStep::Retry {
                delay: gate.recheck_interval(),
                log,
            },
        }
    }
}

#[cfg(test)]
#[path = "startup_tests.rs"]
mod tests;
