// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-registration watch session
//!
//! Raw notifications and retry timer fires both funnel into one task, so a
//! session evaluates its gate strictly one event at a time.

use crate::{lock_gate, RetryTimer, SharedGate};
use std::sync::Arc;
use tokio::sync::mpsc;
use watchgate_adapters::{GateLogger, WatchHandler};
use watchgate_core::{Clock, CycleEvent, Effect, TracedEffect, WatchBatch, WatchCycle, WatchError};

pub(crate) type Notification = Result<WatchBatch, WatchError>;

pub(crate) struct Session<C: Clock, L: GateLogger> {
    cycle: WatchCycle,
    gate: SharedGate<C>,
    timer: RetryTimer,
    handler: WatchHandler,
    logger: Arc<L>,
}

impl<C: Clock, L: GateLogger> Session<C, L> {
    pub(crate) fn new(
        cycle: WatchCycle,
        gate: SharedGate<C>,
        handler: WatchHandler,
        logger: Arc<L>,
    ) -> Self {
        Self {
            cycle,
            gate,
            timer: RetryTimer::new(),
            handler,
            logger,
        }
    }

    /// Process events until the raw source's sender is dropped
    pub(crate) async fn run(mut self, mut notifications: mpsc::UnboundedReceiver<Notification>) {
        tracing::debug!(session = self.cycle.id(), "watch session started");

        loop {
            let event = tokio::select! {
                // A waiting notification always wins over a due retry
                biased;
                notification = notifications.recv() => match notification {
                    Some(notification) => CycleEvent::Notification(notification),
                    None => break,
                },
                _ = self.timer.fired() => CycleEvent::RecheckFired,
            };
            self.handle(event);
        }

        tracing::debug!(
            session = self.cycle.id(),
            state = %self.cycle.state(),
            "watch session ended"
        );
    }

    fn handle(&mut self, event: CycleEvent) {
        let effects = {
            let mut gate = lock_gate(&self.gate);
            self.cycle.handle(event, &mut gate)
        };
        for effect in effects {
            self.execute(effect);
        }
    }

    fn execute(&mut self, effect: Effect) {
        let span =
            tracing::debug_span!("effect", effect = effect.name(), session = self.cycle.id());
        let _guard = span.enter();
        tracing::trace!(fields = ?effect.fields(), "executing");

        match effect {
            Effect::Deliver(batch) => {
                tracing::info!(
                    changed = batch.changed.len(),
                    removed = batch.removed.len(),
                    "condition met, delivering changes"
                );
                (self.handler)(Ok(batch));
            }
            Effect::Fail(error) => {
                tracing::warn!(error = %error, "forwarding watch error");
                (self.handler)(Err(error));
            }
            Effect::SetTimer { id, duration } => self.timer.schedule(id, duration),
            Effect::CancelTimer { id } => {
                self.timer.cancel(&id);
            }
            Effect::Log { message } => self.logger.info(&message),
        }
    }
}
