#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rdl() -> Command {
    cargo_bin_cmd!("rdeadliner")
}

/// Create a unique test store path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdeadliner.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the store schema (test mode: no config file writes)
pub fn init_store(db_path: &str) {
    rdl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Read the raw JSON text stored under a key, straight from the store.
pub fn stored_raw(db_path: &str, key: &str) -> String {
    let conn = rusqlite::Connection::open(db_path).expect("open store");
    conn.query_row(
        "SELECT value FROM store WHERE key = ?1",
        [key],
        |row| row.get(0),
    )
    .expect("stored key")
}

/// Parsed `events` collection as generic JSON.
pub fn stored_events(db_path: &str) -> serde_json::Value {
    serde_json::from_str(&stored_raw(db_path, "events")).expect("valid events JSON")
}

/// Parsed `partitions` collection as generic JSON.
pub fn stored_partitions(db_path: &str) -> serde_json::Value {
    serde_json::from_str(&stored_raw(db_path, "partitions")).expect("valid partitions JSON")
}

/// Id of the n-th stored event (creation order).
pub fn event_id(db_path: &str, index: usize) -> i64 {
    stored_events(db_path)[index]["id"]
        .as_i64()
        .expect("event id")
}

/// Id of the n-th stored partition (creation order).
pub fn partition_id(db_path: &str, index: usize) -> i64 {
    stored_partitions(db_path)[index]["id"]
        .as_i64()
        .expect("partition id")
}
