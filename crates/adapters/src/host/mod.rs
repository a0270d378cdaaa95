// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host build tool lifecycle interface

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeHost;

use crate::watch::WatchSource;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while a plugin hooks into the host
#[derive(Debug, Error)]
pub enum HostError {
    #[error("host has no watch source to wrap")]
    NoWatchSource,
    #[error("plugin setup failed: {0}")]
    Setup(String),
}

/// The part of the host environment a plugin may rewire
pub trait WatchEnvironment: Send {
    fn watch_source(&self) -> Option<Arc<dyn WatchSource>>;

    fn set_watch_source(&mut self, source: Arc<dyn WatchSource>);
}

/// Extension points the host calls into
#[async_trait]
pub trait HostPlugin: Send + Sync {
    /// Fired once while the host sets up its environment
    fn on_environment(&self, env: &mut dyn WatchEnvironment) -> Result<(), HostError>;

    /// Fired at the start of every watch run; the host waits for it
    async fn on_watch_run(&self);
}
