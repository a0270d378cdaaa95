// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Collaborator interfaces the gate relies on: the host's raw watch source,
//! its logger and its plugin lifecycle

pub mod host;
pub mod logger;
pub mod traced;
pub mod watch;

pub use host::{HostError, HostPlugin, WatchEnvironment};
pub use logger::{GateLogger, TracingLogger};
pub use traced::TracedWatchSource;
pub use watch::{WatchHandle, WatchHandler, WatchSource};
pub use watchgate_core::{WatchBatch, WatchError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use host::FakeHost;
#[cfg(any(test, feature = "test-support"))]
pub use logger::FakeLogger;
#[cfg(any(test, feature = "test-support"))]
pub use watch::FakeWatchSource;
