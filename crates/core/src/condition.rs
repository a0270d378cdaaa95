// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Gate conditions
//!
//! A condition looks at everything accumulated since the last delivery and
//! decides whether the downstream rebuild may run.

use crate::change_set::ChangeSet;
use crate::decision::GateDecision;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Decides whether accumulated changes are sufficient to proceed
pub trait Condition: Send + Sync {
    fn evaluate(&self, changes: &ChangeSet, removals: &ChangeSet) -> GateDecision;
}

impl<F> Condition for F
where
    F: Fn(&ChangeSet, &ChangeSet) -> GateDecision + Send + Sync,
{
    fn evaluate(&self, changes: &ChangeSet, removals: &ChangeSet) -> GateDecision {
        self(changes, removals)
    }
}

/// Always accepts
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl Condition for Always {
    fn evaluate(&self, _changes: &ChangeSet, _removals: &ChangeSet) -> GateDecision {
        GateDecision::Accepted
    }
}

/// Accepts once at least `count` distinct ids have changed
#[derive(Debug, Clone, Copy)]
pub struct MinChanges {
    pub count: usize,
}

impl Condition for MinChanges {
    fn evaluate(&self, changes: &ChangeSet, _removals: &ChangeSet) -> GateDecision {
        if changes.len() >= self.count {
            GateDecision::Accepted
        } else {
            GateDecision::rejected([format!(
                "waiting for {} changed files, have {}",
                self.count,
                changes.len()
            )])
        }
    }
}

/// Accepts once every listed id has been seen among the changes
///
/// Useful when a rebuild depends on several generated outputs that land at
/// different times.
#[derive(Debug, Clone)]
pub struct RequireAll {
    pub ids: Vec<String>,
}

impl Condition for RequireAll {
    fn evaluate(&self, changes: &ChangeSet, _removals: &ChangeSet) -> GateDecision {
        let missing: Vec<String> = self
            .ids
            .iter()
            .filter(|id| !changes.contains(id))
            .map(|id| format!("waiting for {}", id))
            .collect();

        if missing.is_empty() {
            GateDecision::Accepted
        } else {
            GateDecision::Rejected { reasons: missing }
        }
    }
}

/// Configured description of a built-in condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConditionConfig {
    Always,
    MinChanges { count: usize },
    RequireAll { ids: Vec<String> },
}

impl ConditionConfig {
    pub fn build(&self) -> Arc<dyn Condition> {
        match self {
            ConditionConfig::Always => Arc::new(Always),
            ConditionConfig::MinChanges { count } => Arc::new(MinChanges { count: *count }),
            ConditionConfig::RequireAll { ids } => Arc::new(RequireAll { ids: ids.clone() }),
        }
    }
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;
