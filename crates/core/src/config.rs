// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Gate configuration
//!
//! ```toml
//! recheck_interval = "500ms"
//! report_interval = "10s"
//!
//! [condition]
//! kind = "min_changes"
//! count = 2
//! ```

use crate::condition::ConditionConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Delay between condition re-evaluations while rejected
pub const DEFAULT_RECHECK_INTERVAL: Duration = Duration::from_millis(200);

/// Minimum spacing between repeated rejection diagnostics
pub const FALSE_CONDITION_PRINT_INTERVAL: Duration = Duration::from_millis(10_000);

/// Errors from building or validating a gate configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("recheck interval must be positive")]
    ZeroRecheckInterval,
    #[error("report interval must be positive")]
    ZeroReportInterval,
    #[error("no condition configured")]
    MissingCondition,
    #[error("invalid gate config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for a watch gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    #[serde(with = "humantime_serde")]
    pub recheck_interval: Duration,
    #[serde(with = "humantime_serde")]
    pub report_interval: Duration,
    /// Built-in condition; programmatic conditions are passed separately
    pub condition: Option<ConditionConfig>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            recheck_interval: DEFAULT_RECHECK_INTERVAL,
            report_interval: FALSE_CONDITION_PRINT_INTERVAL,
            condition: None,
        }
    }
}

impl GateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GateConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_recheck_interval(mut self, interval: Duration) -> Self {
        self.recheck_interval = interval;
        self
    }

    pub fn with_report_interval(mut self, interval: Duration) -> Self {
        self.report_interval = interval;
        self
    }

    pub fn with_condition(mut self, condition: ConditionConfig) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recheck_interval.is_zero() {
            return Err(ConfigError::ZeroRecheckInterval);
        }
        if self.report_interval.is_zero() {
            return Err(ConfigError::ZeroReportInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
