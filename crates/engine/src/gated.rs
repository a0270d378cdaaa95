// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Gated watch source
//!
//! Wraps a raw watch source. Each registration gets its own session task;
//! the downstream handler only hears about accumulated snapshots the gate
//! accepted, or about upstream errors.

use crate::session::{Notification, Session};
use crate::{RuntimeError, SharedGate};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use watchgate_adapters::{GateLogger, WatchHandle, WatchHandler, WatchSource};
use watchgate_core::{Clock, IdGen, WatchCycle, WatchError};

/// Watch source that holds notifications back until the gate accepts them
pub struct GatedWatchSource<W, L, C: Clock, I> {
    inner: W,
    gate: SharedGate<C>,
    logger: Arc<L>,
    id_gen: I,
    runtime: Handle,
}

impl<W, L, C, I> GatedWatchSource<W, L, C, I>
where
    W: WatchSource,
    L: GateLogger,
    C: Clock,
    I: IdGen,
{
    /// Must be called from within a tokio runtime; sessions are spawned on it
    pub fn new(
        inner: W,
        gate: SharedGate<C>,
        logger: Arc<L>,
        id_gen: I,
    ) -> Result<Self, RuntimeError> {
        let runtime = Handle::try_current().map_err(|_| RuntimeError::NoRuntime)?;
        Ok(Self {
            inner,
            gate,
            logger,
            id_gen,
            runtime,
        })
    }
}

impl<W, L, C, I> WatchSource for GatedWatchSource<W, L, C, I>
where
    W: WatchSource,
    L: GateLogger,
    C: Clock,
    I: IdGen,
{
    fn watch(&self, handler: WatchHandler) -> Result<Box<dyn WatchHandle>, WatchError> {
        let id = self.id_gen.next();
        let (tx, rx) = mpsc::unbounded_channel::<Notification>();

        let session_id = id.clone();
        let raw = self.inner.watch(Box::new(move |notification: Notification| {
            if tx.send(notification).is_err() {
                tracing::trace!(session = %session_id, "session gone, dropping notification");
            }
        }))?;

        let session = Session::new(
            WatchCycle::new(id.clone()),
            self.gate.clone(),
            handler,
            self.logger.clone(),
        );
        let task = self.runtime.spawn(session.run(rx));
        tracing::info!(session = %id, "gated watch registered");

        Ok(Box::new(GatedWatchHandle {
            id,
            raw,
            task: Some(task),
        }))
    }
}

struct GatedWatchHandle {
    id: String,
    raw: Box<dyn WatchHandle>,
    task: Option<JoinHandle<()>>,
}

impl WatchHandle for GatedWatchHandle {
    fn close(&mut self) {
        self.raw.close();
        if let Some(task) = self.task.take() {
            // Drops the pending retry and any accumulated ids with the session
            task.abort();
            tracing::info!(session = %self.id, "gated watch closed");
        }
    }
}

impl Drop for GatedWatchHandle {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
#[path = "gated_tests.rs"]
mod tests;
