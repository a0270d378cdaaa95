// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logger interface

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeLogger;

/// Receives the gate's human-readable diagnostics
pub trait GateLogger: Send + Sync + 'static {
    fn info(&self, message: &str);
}

/// Logger that forwards to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl GateLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "watchgate", "{}", message);
    }
}
