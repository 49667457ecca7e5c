#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::Datelike;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn irr() -> Command {
    cargo_bin_cmd!("irrical")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_irrical.sqlite", name));
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

/// Initialize the schema in a test DB (config file writes are skipped)
pub fn init_db(db_path: &str) {
    irr()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// A month that is always safely in the future: June of next year.
/// Past-date lockout is relative to the real clock, so tests must only
/// toggle days that cannot be past whenever they run.
pub fn future_month() -> String {
    let today = chrono::Local::now().date_naive();
    format!("{}-06", today.year() + 1)
}

/// A second future month (July of next year), for per-month scoping tests.
pub fn other_future_month() -> String {
    let today = chrono::Local::now().date_naive();
    format!("{}-07", today.year() + 1)
}

/// The year used by `future_month`.
pub fn future_year() -> i32 {
    chrono::Local::now().date_naive().year() + 1
}
