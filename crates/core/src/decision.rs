// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Gate decisions

/// Outcome of evaluating a gate condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The accumulated changes are sufficient to proceed
    Accepted,
    /// Not ready yet; `reasons` is advisory text for the operator.
    /// An empty list suppresses diagnostics entirely.
    Rejected { reasons: Vec<String> },
}

impl GateDecision {
    pub fn rejected<S: Into<String>>(reasons: impl IntoIterator<Item = S>) -> Self {
        GateDecision::Rejected {
            reasons: reasons.into_iter().map(Into::into).collect(),
        }
    }

    /// Rejection with no diagnostic text
    pub fn silent() -> Self {
        GateDecision::Rejected { reasons: vec![] }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, GateDecision::Accepted)
    }
}

impl From<bool> for GateDecision {
    fn from(ready: bool) -> Self {
        if ready {
            GateDecision::Accepted
        } else {
            GateDecision::silent()
        }
    }
}

impl From<Result<(), Vec<String>>> for GateDecision {
    fn from(result: Result<(), Vec<String>>) -> Self {
        match result {
            Ok(()) => GateDecision::Accepted,
            Err(reasons) => GateDecision::Rejected { reasons },
        }
    }
}
