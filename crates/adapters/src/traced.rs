// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced watch source wrapper for consistent observability

use crate::watch::{WatchHandle, WatchHandler, WatchSource};
use watchgate_core::{WatchBatch, WatchError};

/// Wrapper that adds tracing to any WatchSource
#[derive(Clone)]
pub struct TracedWatchSource<W> {
    name: &'static str,
    inner: W,
}

impl<W> TracedWatchSource<W> {
    /// `name` labels the spans, e.g. "raw" or "gated"
    pub fn new(name: &'static str, inner: W) -> Self {
        Self { name, inner }
    }
}

impl<W: WatchSource> WatchSource for TracedWatchSource<W> {
    fn watch(&self, mut handler: WatchHandler) -> Result<Box<dyn WatchHandle>, WatchError> {
        let span = tracing::info_span!("watch.register", source = self.name);
        let _guard = span.enter();

        let name = self.name;
        let traced: WatchHandler = Box::new(move |result: Result<WatchBatch, WatchError>| {
            match &result {
                Ok(batch) => tracing::debug!(
                    source = name,
                    changed = batch.changed.len(),
                    removed = batch.removed.len(),
                    "batch"
                ),
                Err(e) => tracing::warn!(source = name, error = %e, "watch error"),
            }
            handler(result)
        });

        let result = self.inner.watch(traced);
        match &result {
            Ok(_) => tracing::info!("registered"),
            Err(e) => tracing::error!(error = %e, "registration failed"),
        }

        result.map(|inner| {
            Box::new(TracedWatchHandle {
                name,
                inner,
                closed: false,
            }) as Box<dyn WatchHandle>
        })
    }
}

struct TracedWatchHandle {
    name: &'static str,
    inner: Box<dyn WatchHandle>,
    closed: bool,
}

impl WatchHandle for TracedWatchHandle {
    fn close(&mut self) {
        if !self.closed {
            tracing::info!(source = self.name, "watch closed");
            self.closed = true;
        }
        self.inner.close();
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
