// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Startup barrier: hold the first watch run until the gate accepts

use crate::{lock_gate, SharedGate};
use std::sync::Arc;
use watchgate_adapters::GateLogger;
use watchgate_core::{Clock, StartupGate, StartupStep};

/// Polls the gate with empty change sets before the first run, once
pub struct StartupBarrier<C: Clock, L> {
    gate: SharedGate<C>,
    startup: tokio::sync::Mutex<StartupGate>,
    logger: Arc<L>,
}

impl<C: Clock, L: GateLogger> StartupBarrier<C, L> {
    pub fn new(gate: SharedGate<C>, logger: Arc<L>) -> Self {
        Self {
            gate,
            startup: tokio::sync::Mutex::new(StartupGate::new()),
            logger,
        }
    }

    /// Wait until the condition accepts; returns at once after the first pass
    ///
    /// Concurrent callers queue behind the one that is polling.
    pub async fn wait_ready(&self) {
        let mut startup = self.startup.lock().await;

        loop {
            let step = {
                let mut gate = lock_gate(&self.gate);
                startup.poll(&mut gate)
            };

            match step {
                StartupStep::Passed => return,
                StartupStep::Ready => {
                    tracing::info!(attempts = startup.attempts(), "startup condition met");
                    return;
                }
                StartupStep::Retry { delay, log } => {
                    if let Some(message) = log {
                        self.logger.info(&message);
                    }
                    tracing::trace!(
                        delay_ms = delay.as_millis() as u64,
                        "startup condition rejected"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    pub async fn is_passed(&self) -> bool {
        self.startup.lock().await.is_passed()
    }

    /// Evaluations made by the barrier so far
    pub async fn attempts(&self) -> u32 {
        self.startup.lock().await.attempts()
    }
}

#[cfg(test)]
#[path = "barrier_tests.rs"]
mod tests;
