// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host plugin that installs the gate

use crate::{GatedWatchSource, RuntimeError, SharedGate, StartupBarrier, TokioClock};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use watchgate_adapters::{
    GateLogger, HostError, HostPlugin, TracedWatchSource, TracingLogger, WatchEnvironment,
    WatchSource,
};
use watchgate_core::{Clock, Condition, Gate, GateConfig, IdGen, UuidIdGen};

/// Plugin adapter dependencies
pub struct PluginDeps<L, I> {
    pub logger: L,
    pub id_gen: I,
}

/// Gates a host's watch-triggered rebuilds behind a condition
///
/// On environment setup it swaps the host's watch source for a gated
/// wrapper; on every watch run it waits on the one-time startup barrier.
pub struct WatchGatePlugin<L = TracingLogger, C: Clock = TokioClock, I = UuidIdGen> {
    gate: SharedGate<C>,
    barrier: StartupBarrier<C, L>,
    logger: Arc<L>,
    id_gen: I,
}

impl WatchGatePlugin {
    /// Plugin with a programmatic condition and production collaborators
    pub fn new(config: &GateConfig, condition: Arc<dyn Condition>) -> Result<Self, RuntimeError> {
        let gate = Gate::new(config, condition, TokioClock)?;
        Ok(Self::with_deps(
            gate,
            PluginDeps {
                logger: TracingLogger,
                id_gen: UuidIdGen,
            },
        ))
    }

    /// Plugin using the built-in condition named in `config`
    pub fn from_config(config: &GateConfig) -> Result<Self, RuntimeError> {
        let gate = Gate::from_config(config, TokioClock)?;
        Ok(Self::with_deps(
            gate,
            PluginDeps {
                logger: TracingLogger,
                id_gen: UuidIdGen,
            },
        ))
    }
}

impl<L, C, I> WatchGatePlugin<L, C, I>
where
    L: GateLogger,
    C: Clock,
    I: IdGen,
{
    pub fn with_deps(gate: Gate<C>, deps: PluginDeps<L, I>) -> Self {
        let gate = Arc::new(Mutex::new(gate));
        let logger = Arc::new(deps.logger);
        Self {
            barrier: StartupBarrier::new(gate.clone(), logger.clone()),
            gate,
            logger,
            id_gen: deps.id_gen,
        }
    }

    /// Wrap a raw watch source with this plugin's gate
    pub fn wrap<W: WatchSource>(
        &self,
        inner: W,
    ) -> Result<GatedWatchSource<W, L, C, I>, RuntimeError> {
        GatedWatchSource::new(
            inner,
            self.gate.clone(),
            self.logger.clone(),
            self.id_gen.clone(),
        )
    }

    pub fn barrier(&self) -> &StartupBarrier<C, L> {
        &self.barrier
    }
}

#[async_trait]
impl<L, C, I> HostPlugin for WatchGatePlugin<L, C, I>
where
    L: GateLogger,
    C: Clock,
    I: IdGen,
{
    fn on_environment(&self, env: &mut dyn WatchEnvironment) -> Result<(), HostError> {
        let raw = env.watch_source().ok_or(HostError::NoWatchSource)?;
        let gated = self.wrap(raw)?;
        env.set_watch_source(Arc::new(TracedWatchSource::new("gated", gated)));
        tracing::info!("watch source gated");
        Ok(())
    }

    async fn on_watch_run(&self) {
        self.barrier.wait_ready().await;
    }
}

#[cfg(test)]
#[path = "plugin_tests.rs"]
mod tests;
