//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use statebox::mvi::Reducer;
use statebox::store::Store;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Snapshots seen by a subscriber, in notification order.
pub type Recorded<S> = Arc<Mutex<Vec<Arc<S>>>>;

/// Subscribe a recorder to `store`.
pub fn record<R: Reducer>(store: &Store<R>) -> Recorded<R::State> {
    let seen: Recorded<R::State> = Arc::default();
    let sink = Arc::clone(&seen);
    store.subscribe(move |state| sink.lock().push(Arc::clone(state)));
    seen
}

/// Write `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    (temp_dir, path)
}

/// Parse JSON-lines output into values.
pub fn json_lines(output: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(output)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).expect("output line is JSON"))
        .collect()
}
