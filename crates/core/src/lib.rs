// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! watchgate-core: pure state machines for gated watch rebuilds
//!
//! This crate provides:
//! - Change sets and the batch payload shared with watch sources
//! - Gate decisions, injectable conditions and built-in conditions
//! - The throttled rejection reporter
//! - The watch cycle (change aggregator + gate poller) and the startup gate
//! - Effects that the engine executes on the state machines' behalf

pub mod clock;
pub mod id;

pub mod batch;
pub mod change_set;
pub mod condition;
pub mod config;
pub mod decision;

// State machines and the effects they emit
pub mod cycle;
pub mod effect;
pub mod gate;
pub mod reporter;
pub mod startup;
pub mod traced;

// Re-exports
pub use batch::{Timestamps, WatchBatch, WatchError};
pub use change_set::ChangeSet;
pub use clock::{Clock, FakeClock, SystemClock};
pub use condition::{Always, Condition, ConditionConfig, MinChanges, RequireAll};
pub use config::{
    ConfigError, GateConfig, DEFAULT_RECHECK_INTERVAL, FALSE_CONDITION_PRINT_INTERVAL,
};
pub use cycle::{CycleEvent, CycleState, WatchCycle};
pub use decision::GateDecision;
pub use effect::Effect;
pub use gate::{Gate, GateCheck};
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use reporter::ThrottledReporter;
pub use startup::{StartupGate, StartupStep};
pub use traced::TracedEffect;
