// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification payload shared by raw and gated watch sources

use crate::change_set::ChangeSet;
use std::collections::BTreeMap;
use std::time::SystemTime;
use thiserror::Error;

/// Modification times keyed by path, as reported by the watch source
pub type Timestamps = BTreeMap<String, SystemTime>;

/// One batch of watch data
///
/// A raw source sends the delta of a single filesystem event batch. The gated
/// source sends the same shape, but `changed` and `removed` then hold
/// everything accumulated since the previous delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchBatch {
    pub file_timestamps: Timestamps,
    pub directory_timestamps: Timestamps,
    pub changed: ChangeSet,
    pub removed: ChangeSet,
}

impl WatchBatch {
    /// Batch carrying only changed and removed ids
    pub fn new(changed: ChangeSet, removed: ChangeSet) -> Self {
        Self {
            changed,
            removed,
            ..Self::default()
        }
    }

    /// Batch with the given changed ids and no removals
    pub fn changed<S: Into<String>>(ids: impl IntoIterator<Item = S>) -> Self {
        Self::new(ids.into_iter().collect(), ChangeSet::new())
    }

    /// Batch with the given removed ids and no changes
    pub fn removed<S: Into<String>>(ids: impl IntoIterator<Item = S>) -> Self {
        Self::new(ChangeSet::new(), ids.into_iter().collect())
    }

    pub fn with_file_timestamps(mut self, timestamps: Timestamps) -> Self {
        self.file_timestamps = timestamps;
        self
    }

    pub fn with_directory_timestamps(mut self, timestamps: Timestamps) -> Self {
        self.directory_timestamps = timestamps;
        self
    }
}

/// Errors reported by a watch source
///
/// These travel to the downstream handler unmodified, so the type is
/// cloneable and comparable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WatchError {
    #[error("watch source failed: {0}")]
    Source(String),
    #[error("watch registration failed: {0}")]
    Registration(String),
}
