// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Watch cycle state machine: change aggregation plus gate polling
//!
//! Raw notifications are folded into accumulated change and removal sets.
//! After each notification, and each time the retry timer fires while
//! rejected, the gate is evaluated against everything accumulated so far.
//! On acceptance the accumulated sets are moved out as one snapshot and
//! fresh empty sets take their place.

use crate::batch::{Timestamps, WatchBatch, WatchError};
use crate::change_set::ChangeSet;
use crate::clock::Clock;
use crate::effect::Effect;
use crate::gate::{Gate, GateCheck};
use std::fmt;

/// Events that drive a watch cycle
#[derive(Debug, Clone)]
pub enum CycleEvent {
    /// A raw notification from the underlying watch source
    Notification(Result<WatchBatch, WatchError>),
    /// The retry timer elapsed
    RecheckFired,
}

/// Observable state of a watch cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    /// Nothing accumulated, nothing pending
    Idle,
    /// Ids accumulated but no evaluation pending
    Accumulating,
    /// Condition rejected, retry timer armed
    Waiting,
}

impl fmt::Display for CycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleState::Idle => write!(f, "idle"),
            CycleState::Accumulating => write!(f, "accumulating"),
            CycleState::Waiting => write!(f, "waiting"),
        }
    }
}

/// Per-session accumulation state
#[derive(Debug, Clone)]
pub struct WatchCycle {
    id: String,
    changes: ChangeSet,
    removals: ChangeSet,
    file_timestamps: Timestamps,
    directory_timestamps: Timestamps,
    pending_timer: Option<String>,
}

impl WatchCycle {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            changes: ChangeSet::new(),
            removals: ChangeSet::new(),
            file_timestamps: Timestamps::new(),
            directory_timestamps: Timestamps::new(),
            pending_timer: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Timer id used for this cycle's rechecks
    pub fn recheck_timer_id(&self) -> String {
        format!("gate:{}:recheck", self.id)
    }

    pub fn state(&self) -> CycleState {
        if self.pending_timer.is_some() {
            CycleState::Waiting
        } else if self.changes.is_empty() && self.removals.is_empty() {
            CycleState::Idle
        } else {
            CycleState::Accumulating
        }
    }

    pub fn changes(&self) -> &ChangeSet {
        &self.changes
    }

    pub fn removals(&self) -> &ChangeSet {
        &self.removals
    }

    pub fn pending_timer(&self) -> Option<&str> {
        self.pending_timer.as_deref()
    }

    /// Apply an event, returning the effects the runtime must perform in order
    pub fn handle<C: Clock>(&mut self, event: CycleEvent, gate: &mut Gate<C>) -> Vec<Effect> {
        let mut effects = Vec::new();

        match event {
            CycleEvent::Notification(Err(error)) => {
                // Accumulated ids are left as they are; no decision is made
                self.cancel_pending(&mut effects);
                gate.reset_reporter();
                effects.push(Effect::Fail(error));
            }
            CycleEvent::Notification(Ok(batch)) => {
                self.cancel_pending(&mut effects);
                self.changes.merge(batch.changed);
                self.removals.merge(batch.removed);
                self.file_timestamps = batch.file_timestamps;
                self.directory_timestamps = batch.directory_timestamps;
                self.evaluate(gate, &mut effects);
            }
            CycleEvent::RecheckFired => {
                // Stale fire after a cancel or an accepted delivery
                if self.pending_timer.take().is_some() {
                    self.evaluate(gate, &mut effects);
                }
            }
        }

        effects
    }

    fn cancel_pending(&mut self, effects: &mut Vec<Effect>) {
        if let Some(id) = self.pending_timer.take() {
            effects.push(Effect::CancelTimer { id });
        }
    }

    fn evaluate<C: Clock>(&mut self, gate: &mut Gate<C>, effects: &mut Vec<Effect>) {
        match gate.check(&self.changes, &self.removals) {
            GateCheck::Accepted => {
                self.cancel_pending(effects);
                effects.push(Effect::Deliver(self.take_snapshot()));
            }
            GateCheck::Rejected { log } => {
                if let Some(message) = log {
                    effects.push(Effect::Log { message });
                }
                let id = self.recheck_timer_id();
                self.pending_timer = Some(id.clone());
                effects.push(Effect::SetTimer {
                    id,
                    duration: gate.recheck_interval(),
                });
            }
        }
    }

    /// Move the accumulated sets out, leaving fresh empty ones behind
    fn take_snapshot(&mut self) -> WatchBatch {
        WatchBatch {
            file_timestamps: self.file_timestamps.clone(),
            directory_timestamps: self.directory_timestamps.clone(),
            changed: std::mem::take(&mut self.changes),
            removed: std::mem::take(&mut self.removals),
        }
    }
}

#[cfg(test)]
#[path = "cycle_tests.rs"]
mod tests;
