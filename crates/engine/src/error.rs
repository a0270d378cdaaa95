// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine runtime

use thiserror::Error;
use watchgate_adapters::HostError;
use watchgate_core::ConfigError;

/// Errors that can occur while setting up gated watching
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("gated watching needs a tokio runtime")]
    NoRuntime,
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl From<RuntimeError> for HostError {
    fn from(error: RuntimeError) -> Self {
        HostError::Setup(error.to_string())
    }
}
