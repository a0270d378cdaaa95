// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

type Seen = Arc<Mutex<Vec<Result<WatchBatch, WatchError>>>>;

fn recording_handler() -> (WatchHandler, Seen) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let handler: WatchHandler = Box::new(move |result: Result<WatchBatch, WatchError>| {
        sink.lock().unwrap().push(result)
    });
    (handler, seen)
}

#[test]
fn emit_reaches_open_registrations() {
    let source = FakeWatchSource::new();
    let (handler, seen) = recording_handler();
    let _handle = source.watch(handler).unwrap();

    source.emit(WatchBatch::changed(["a.js"]));
    source.emit_error(WatchError::Source("boom".to_string()));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], Ok(WatchBatch::changed(["a.js"])));
    assert_eq!(seen[1], Err(WatchError::Source("boom".to_string())));
}

#[test]
fn closed_registration_receives_nothing() {
    let source = FakeWatchSource::new();
    let (handler, seen) = recording_handler();
    let mut handle = source.watch(handler).unwrap();

    handle.close();
    handle.close();
    source.emit(WatchBatch::changed(["a.js"]));

    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(source.registrations(), 1);
    assert_eq!(source.open_registrations(), 0);
}

#[test]
fn fail_next_watch_fails_once() {
    let source = FakeWatchSource::new();
    source.fail_next_watch(WatchError::Registration("no inotify".to_string()));

    let (handler, _) = recording_handler();
    assert!(source.watch(handler).is_err());

    let (handler, _) = recording_handler();
    assert!(source.watch(handler).is_ok());
    assert_eq!(source.open_registrations(), 1);
}
