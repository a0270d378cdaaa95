// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake logger for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::GateLogger;
use std::sync::{Arc, Mutex};

/// Logger that records every message
#[derive(Clone, Default)]
pub struct FakeLogger {
    messages: Arc<Mutex<Vec<String>>>,
}

impl FakeLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded messages
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl GateLogger for FakeLogger {
    fn info(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}
