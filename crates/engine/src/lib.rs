// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! watchgate execution engine
//!
//! Runs the core gate state machines on tokio: one task per watch
//! registration, a cancellable retry timer, and the startup barrier.

mod barrier;
mod clock;
mod error;
mod gated;
mod plugin;
mod session;
mod timer;

pub use barrier::StartupBarrier;
pub use clock::TokioClock;
pub use error::RuntimeError;
pub use gated::GatedWatchSource;
pub use plugin::{PluginDeps, WatchGatePlugin};
pub use timer::RetryTimer;

use std::sync::{Arc, Mutex, MutexGuard};
use watchgate_core::{Clock, Gate};

/// Gate shared by the startup barrier and every watch session of a plugin
pub type SharedGate<C> = Arc<Mutex<Gate<C>>>;

pub(crate) fn lock_gate<C: Clock>(gate: &SharedGate<C>) -> MutexGuard<'_, Gate<C>> {
    gate.lock().unwrap_or_else(|e| e.into_inner())
}
