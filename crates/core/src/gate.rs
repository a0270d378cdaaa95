// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The gate: a condition paired with its rejection reporter
//!
//! The startup barrier and every watch cycle of a plugin share one gate, so
//! a rejection streak is timed the same way no matter which of them polls.

use crate::change_set::ChangeSet;
use crate::clock::Clock;
use crate::condition::Condition;
use crate::config::{ConfigError, GateConfig};
use crate::decision::GateDecision;
use crate::reporter::ThrottledReporter;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Result of one gate evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateCheck {
    Accepted,
    /// `log` carries the throttled reason, when one is due
    Rejected {
        log: Option<String>,
    },
}

/// Condition, reporter and timing for one plugin instance
pub struct Gate<C: Clock> {
    condition: Arc<dyn Condition>,
    reporter: ThrottledReporter,
    recheck_interval: Duration,
    clock: C,
}

impl<C: Clock> fmt::Debug for Gate<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gate")
            .field("reporter", &self.reporter)
            .field("recheck_interval", &self.recheck_interval)
            .finish_non_exhaustive()
    }
}

impl<C: Clock> Gate<C> {
    pub fn new(
        config: &GateConfig,
        condition: Arc<dyn Condition>,
        clock: C,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            condition,
            reporter: ThrottledReporter::new(config.report_interval),
            recheck_interval: config.recheck_interval,
            clock,
        })
    }

    /// Build a gate from a config that names a built-in condition
    pub fn from_config(config: &GateConfig, clock: C) -> Result<Self, ConfigError> {
        let condition = config
            .condition
            .as_ref()
            .ok_or(ConfigError::MissingCondition)?
            .build();
        Self::new(config, condition, clock)
    }

    /// Evaluate the condition and report a rejection
    ///
    /// Acceptance also ends the reporter's streak.
    pub fn check(&mut self, changes: &ChangeSet, removals: &ChangeSet) -> GateCheck {
        match self.condition.evaluate(changes, removals) {
            GateDecision::Accepted => {
                self.reporter.reset();
                GateCheck::Accepted
            }
            GateDecision::Rejected { reasons } => GateCheck::Rejected {
                log: self.reporter.on_rejection(&reasons, self.clock.now()),
            },
        }
    }

    pub fn reset_reporter(&mut self) {
        self.reporter.reset();
    }

    pub fn recheck_interval(&self) -> Duration {
        self.recheck_interval
    }

    pub fn reporter(&self) -> &ThrottledReporter {
        &self.reporter
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
