// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Watch session id generation
//!
//! Every gated registration gets its own session id. The id keys the
//! session's recheck timer (`gate:<id>:recheck`) and is recorded as the
//! `session` field on the engine's tracing events and effect spans.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Generates unique identifiers for watch sessions
///
/// Ids must be distinct across sessions sharing one gate, since each
/// session arms and cancels its recheck timer by id.
pub trait IdGen: Clone + Send + Sync + 'static {
    /// Id for the next watch session
    fn next(&self) -> String;
}

/// UUID-based ID generator for production use
#[derive(Debug, Clone, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn next(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Sequential ID generator for testing
///
/// Yields `<prefix>-1`, `<prefix>-2`, ... so timer ids and log lines are
/// predictable in assertions.
#[derive(Debug, Clone)]
pub struct SequentialIdGen {
    prefix: String,
    counter: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new("watch")
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_gen_creates_unique_ids() {
        let id_gen = UuidIdGen;
        let id1 = id_gen.next();
        let id2 = id_gen.next();
        assert_ne!(id1, id2);
        assert_eq!(id1.len(), 36);
    }

    #[test]
    fn sequential_gen_counts_from_one() {
        let id_gen = SequentialIdGen::default();
        assert_eq!(id_gen.next(), "watch-1");
        assert_eq!(id_gen.next(), "watch-2");
    }

    #[test]
    fn sequential_gen_clones_share_counter() {
        let a = SequentialIdGen::new("s");
        let b = a.clone();
        assert_eq!(a.next(), "s-1");
        assert_eq!(b.next(), "s-2");
    }

    #[test]
    fn session_id_keys_the_recheck_timer() {
        let cycle = crate::cycle::WatchCycle::new(SequentialIdGen::default().next());
        assert_eq!(cycle.id(), "watch-1");
        assert_eq!(cycle.recheck_timer_id(), "gate:watch-1:recheck");
    }
}
