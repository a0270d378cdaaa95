// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Watch source interface

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeWatchSource;

use std::sync::Arc;
use watchgate_core::{WatchBatch, WatchError};

/// Callback invoked once per notification batch
pub type WatchHandler = Box<dyn FnMut(Result<WatchBatch, WatchError>) + Send + 'static>;

/// Registration returned by a watch source
pub trait WatchHandle: Send {
    /// Stop delivering notifications; closing twice is a no-op
    fn close(&mut self);
}

/// Something that reports filesystem changes to a handler
///
/// The host's own watcher implements this; the gated source wraps it and
/// implements it again, so the host cannot tell the two apart.
pub trait WatchSource: Send + Sync {
    fn watch(&self, handler: WatchHandler) -> Result<Box<dyn WatchHandle>, WatchError>;
}

impl<W: WatchSource + ?Sized> WatchSource for Arc<W> {
    fn watch(&self, handler: WatchHandler) -> Result<Box<dyn WatchHandle>, WatchError> {
        (**self).watch(handler)
    }
}
