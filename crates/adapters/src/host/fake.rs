// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake host for testing plugins
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{HostError, HostPlugin, WatchEnvironment};
use crate::watch::{WatchHandle, WatchHandler, WatchSource};
use std::sync::Arc;
use watchgate_core::WatchError;

/// Minimal host: one watch source slot and a list of plugins
#[derive(Default)]
pub struct FakeHost {
    source: Option<Arc<dyn WatchSource>>,
    plugins: Vec<Arc<dyn HostPlugin>>,
    runs: usize,
}

impl FakeHost {
    pub fn new(source: Arc<dyn WatchSource>) -> Self {
        Self {
            source: Some(source),
            ..Self::default()
        }
    }

    /// Host with no watch source installed
    pub fn without_source() -> Self {
        Self::default()
    }

    /// Register a plugin and run its environment hook
    pub fn apply(&mut self, plugin: Arc<dyn HostPlugin>) -> Result<(), HostError> {
        plugin.on_environment(self)?;
        self.plugins.push(plugin);
        Ok(())
    }

    /// Start a watch run, waiting on every plugin's run hook
    pub async fn start_run(&mut self) {
        for plugin in &self.plugins {
            plugin.on_watch_run().await;
        }
        self.runs += 1;
    }

    /// Register a handler with whatever watch source is installed now
    pub fn watch(&self, handler: WatchHandler) -> Result<Box<dyn WatchHandle>, WatchError> {
        match &self.source {
            Some(source) => source.watch(handler),
            None => Err(WatchError::Registration("no watch source".to_string())),
        }
    }

    pub fn runs(&self) -> usize {
        self.runs
    }
}

impl WatchEnvironment for FakeHost {
    fn watch_source(&self) -> Option<Arc<dyn WatchSource>> {
        self.source.clone()
    }

    fn set_watch_source(&mut self, source: Arc<dyn WatchSource>) {
        self.source = Some(source);
    }
}
