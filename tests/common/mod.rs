use std::path::PathBuf;
use std::sync::Mutex;

use fintrack::storage::{CsvTransactionLog, JsonAccountStore};
use fintrack::tracker::Tracker;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a file-backed tracker rooted in a unique directory per test.
pub fn setup_test_env() -> (Tracker, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let log = CsvTransactionLog::new(base.join("tranzactii.csv"));
    let accounts = JsonAccountStore::new(base.join("conturi.json"));
    (Tracker::new(Box::new(log), Box::new(accounts)), base)
}
