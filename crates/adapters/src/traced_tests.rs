// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::logger::{GateLogger, TracingLogger};
use crate::watch::FakeWatchSource;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use watchgate_core::WatchBatch;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn new() -> Self {
        Self::default()
    }

    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a closure with captured tracing output
fn with_tracing<T>(f: impl FnOnce() -> T) -> (String, T) {
    let logs = CapturedLogs::new();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (logs.contents(), result)
}

#[test]
fn traced_source_forwards_batches() {
    let fake = FakeWatchSource::new();
    let traced = TracedWatchSource::new("raw", fake.clone());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();

    let _handle = traced
        .watch(Box::new(move |result: Result<WatchBatch, WatchError>| {
            sink.lock().unwrap().push(result)
        }))
        .unwrap();
    fake.emit(WatchBatch::changed(["a.js"]));

    assert_eq!(
        *seen.lock().unwrap(),
        vec![Ok(WatchBatch::changed(["a.js"]))]
    );
}

#[test]
fn traced_source_logs_registration_batches_and_close() {
    let fake = FakeWatchSource::new();
    let traced = TracedWatchSource::new("raw", fake.clone());

    let (logs, ()) = with_tracing(|| {
        let mut handle = traced.watch(Box::new(|_| {})).unwrap();
        fake.emit(WatchBatch::changed(["a.js", "b.js"]));
        fake.emit_error(WatchError::Source("overflow".to_string()));
        handle.close();
        handle.close();
    });

    assert!(logs.contains("watch.register"), "logs: {}", logs);
    assert!(logs.contains("registered"), "logs: {}", logs);
    assert!(logs.contains("changed=2"), "logs: {}", logs);
    assert!(
        logs.contains("watch source failed: overflow"),
        "logs: {}",
        logs
    );
    assert_eq!(logs.matches("watch closed").count(), 1, "logs: {}", logs);
    assert_eq!(fake.open_registrations(), 0);
}

#[test]
fn traced_source_logs_registration_failure() {
    let fake = FakeWatchSource::new();
    fake.fail_next_watch(WatchError::Registration("denied".to_string()));
    let traced = TracedWatchSource::new("raw", fake);

    let (logs, result) = with_tracing(|| traced.watch(Box::new(|_| {})));

    assert!(result.is_err());
    assert!(logs.contains("registration failed"), "logs: {}", logs);
}

#[test]
fn tracing_logger_writes_message() {
    let (logs, ()) = with_tracing(|| TracingLogger.info("waiting for dist/app.js"));
    assert!(logs.contains("waiting for dist/app.js"), "logs: {}", logs);
}
