// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects requested by the gate state machines

use crate::batch::{WatchBatch, WatchError};
use crate::traced::TracedEffect;
use std::time::Duration;

/// Side effects that the watch cycle asks its runtime to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand an accumulated snapshot to the downstream handler
    Deliver(WatchBatch),
    /// Pass an upstream error to the downstream handler
    Fail(WatchError),
    /// Arm the retry timer
    SetTimer { id: String, duration: Duration },
    /// Disarm the retry timer
    CancelTimer { id: String },
    /// Emit a diagnostic message through the logger
    Log { message: String },
}

impl TracedEffect for Effect {
    fn name(&self) -> &'static str {
        match self {
            Effect::Deliver(_) => "deliver",
            Effect::Fail(_) => "fail",
            Effect::SetTimer { .. } => "set_timer",
            Effect::CancelTimer { .. } => "cancel_timer",
            Effect::Log { .. } => "log",
        }
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Effect::Deliver(batch) => vec![
                ("changed", batch.changed.len().to_string()),
                ("removed", batch.removed.len().to_string()),
            ],
            Effect::Fail(error) => vec![("error", error.to_string())],
            Effect::SetTimer { id, duration } => vec![
                ("timer_id", id.clone()),
                ("duration_ms", duration.as_millis().to_string()),
            ],
            Effect::CancelTimer { id } => vec![("timer_id", id.clone())],
            Effect::Log { message } => vec![("lines", message.lines().count().to_string())],
        }
    }
}
