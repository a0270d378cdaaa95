// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn defaults_match_documented_intervals() {
    let config = GateConfig::default();
    assert_eq!(config.recheck_interval, Duration::from_millis(200));
    assert_eq!(config.report_interval, Duration::from_secs(10));
    assert!(config.condition.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn empty_document_uses_defaults() {
    let config = GateConfig::from_toml("").unwrap();
    assert_eq!(config, GateConfig::default());
}

#[test]
fn parses_humantime_durations_and_condition() {
    let config = GateConfig::from_toml(
        r#"
        recheck_interval = "500ms"
        report_interval = "30s"

        [condition]
        kind = "require_all"
        ids = ["dist/app.js"]
        "#,
    )
    .unwrap();

    assert_eq!(config.recheck_interval, Duration::from_millis(500));
    assert_eq!(config.report_interval, Duration::from_secs(30));
    assert_eq!(
        config.condition,
        Some(ConditionConfig::RequireAll {
            ids: vec!["dist/app.js".to_string()]
        })
    );
}

#[test]
fn zero_recheck_interval_is_rejected() {
    let err = GateConfig::from_toml(r#"recheck_interval = "0s""#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroRecheckInterval));
}

#[test]
fn zero_report_interval_is_rejected() {
    let config = GateConfig::new().with_report_interval(Duration::ZERO);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ZeroReportInterval)
    ));
}

#[test]
fn malformed_duration_is_a_parse_error() {
    let err = GateConfig::from_toml(r#"recheck_interval = "soon""#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
