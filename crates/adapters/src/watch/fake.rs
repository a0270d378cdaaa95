// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake watch source for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{WatchHandle, WatchHandler, WatchSource};
use std::sync::{Arc, Mutex};
use watchgate_core::{WatchBatch, WatchError};

struct Registration {
    handler: Option<WatchHandler>,
}

#[derive(Default)]
struct FakeState {
    registrations: Vec<Registration>,
    fail_next: Option<WatchError>,
}

/// Watch source driven by the test instead of the filesystem
#[derive(Clone, Default)]
pub struct FakeWatchSource {
    state: Arc<Mutex<FakeState>>,
}

impl FakeWatchSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a batch to every open registration
    pub fn emit(&self, batch: WatchBatch) {
        self.send(Ok(batch));
    }

    /// Deliver an error to every open registration
    pub fn emit_error(&self, error: WatchError) {
        self.send(Err(error));
    }

    /// Make the next `watch` call fail with `error`
    pub fn fail_next_watch(&self, error: WatchError) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.fail_next = Some(error);
    }

    /// Total number of successful registrations
    pub fn registrations(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .registrations
            .len()
    }

    /// Registrations that have not been closed
    pub fn open_registrations(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .registrations
            .iter()
            .filter(|r| r.handler.is_some())
            .count()
    }

    fn send(&self, result: Result<WatchBatch, WatchError>) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        for handler in state
            .registrations
            .iter_mut()
            .filter_map(|r| r.handler.as_mut())
        {
            handler(result.clone());
        }
    }
}

impl WatchSource for FakeWatchSource {
    fn watch(&self, handler: WatchHandler) -> Result<Box<dyn WatchHandle>, WatchError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(error) = state.fail_next.take() {
            return Err(error);
        }

        state.registrations.push(Registration {
            handler: Some(handler),
        });
        Ok(Box::new(FakeWatchHandle {
            index: state.registrations.len() - 1,
            state: self.state.clone(),
        }))
    }
}

struct FakeWatchHandle {
    index: usize,
    state: Arc<Mutex<FakeState>>,
}

impl WatchHandle for FakeWatchHandle {
    fn close(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(registration) = state.registrations.get_mut(self.index) {
            registration.handler = None;
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
