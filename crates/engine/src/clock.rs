// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock that follows tokio's (possibly paused) time

use std::time::Instant;
use watchgate_core::Clock;

/// Reads `tokio::time::Instant`, so reporter windows line up with the
/// retry timer even when tests pause time
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}
