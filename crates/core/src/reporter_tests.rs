// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::clock::{Clock, FakeClock};
use proptest::prelude::*;

fn reasons(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

#[test]
fn first_rejection_only_opens_window() {
    let clock = FakeClock::new();
    let mut reporter = ThrottledReporter::default();

    assert_eq!(
        reporter.on_rejection(&reasons(&["not yet"]), clock.now()),
        None
    );
    assert!(reporter.is_tracking());
}

#[test]
fn emits_once_threshold_is_exceeded() {
    let clock = FakeClock::new();
    let mut reporter = ThrottledReporter::default();
    let why = reasons(&["waiting for dist/a.js", "waiting for dist/b.js"]);

    reporter.on_rejection(&why, clock.now());

    // Exactly at the threshold is not enough
    clock.advance_ms(10_000);
    assert_eq!(reporter.on_rejection(&why, clock.now()), None);

    clock.advance_ms(1);
    assert_eq!(
        reporter.on_rejection(&why, clock.now()),
        Some("waiting for dist/a.js\nwaiting for dist/b.js".to_string())
    );

    // Window restarted at the emission
    clock.advance_ms(5_000);
    assert_eq!(reporter.on_rejection(&why, clock.now()), None);
}

#[test]
fn empty_reasons_never_emit() {
    let clock = FakeClock::new();
    let mut reporter = ThrottledReporter::default();

    for _ in 0..10 {
        assert_eq!(reporter.on_rejection(&[], clock.now()), None);
        clock.advance_ms(15_000);
    }
}

#[test]
fn reset_starts_a_fresh_streak() {
    let clock = FakeClock::new();
    let mut reporter = ThrottledReporter::default();
    let why = reasons(&["blocked"]);

    reporter.on_rejection(&why, clock.now());
    clock.advance_ms(9_000);
    reporter.reset();
    assert!(!reporter.is_tracking());

    // Elapsed time before the reset does not count toward the new window
    clock.advance_ms(2_000);
    assert_eq!(reporter.on_rejection(&why, clock.now()), None);
    clock.advance_ms(10_001);
    assert_eq!(
        reporter.on_rejection(&why, clock.now()),
        Some("blocked".to_string())
    );
}

#[test]
fn continuous_rejections_emit_at_most_three_times_in_25_seconds() {
    let clock = FakeClock::new();
    let mut reporter = ThrottledReporter::default();
    let why = reasons(&["still compiling"]);

    let mut emitted = 0;
    for _ in 0..=25_000 {
        if reporter.on_rejection(&why, clock.now()).is_some() {
            emitted += 1;
        }
        clock.advance_ms(1);
    }

    assert!(emitted >= 1);
    assert!(emitted <= 3, "emitted {} messages", emitted);
}

#[test]
fn custom_interval_is_respected() {
    let clock = FakeClock::new();
    let mut reporter = ThrottledReporter::new(Duration::from_millis(100));
    let why = reasons(&["x"]);

    reporter.on_rejection(&why, clock.now());
    clock.advance_ms(101);
    assert!(reporter.on_rejection(&why, clock.now()).is_some());
    assert_eq!(reporter.interval(), Duration::from_millis(100));
}

proptest! {
    #[test]
    fn emissions_are_spaced_by_more_than_the_interval(
        gaps in proptest::collection::vec(0u64..4_000, 1..200)
    ) {
        let clock = FakeClock::new();
        let mut reporter = ThrottledReporter::default();
        let why = reasons(&["blocked"]);
        let start = clock.now();
        let mut last_emit: Option<std::time::Instant> = None;

        reporter.on_rejection(&why, clock.now());
        for gap in gaps {
            clock.advance_ms(gap);
            if reporter.on_rejection(&why, clock.now()).is_some() {
                let now = clock.now();
                let since = now.duration_since(last_emit.unwrap_or(start));
                prop_assert!(since > FALSE_CONDITION_PRINT_INTERVAL);
                last_emit = Some(now);
            }
        }
    }
}
