#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn stly() -> Command {
    cargo_bin_cmd!("shifttally")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shifttally.sqlite", name));
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

/// Initialize DB, register one worker and punch a simple two-day week.
///
/// Week of 2025-06-02 (Mon): Monday 09:00-17:00 with a 30 min break,
/// Tuesday 09:00-17:00 straight through. Worked total = 7.5 + 8 = 15.5 h.
pub fn init_db_with_week(db_path: &str, worker: &str) {
    stly()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    stly()
        .args([
            "--db", db_path, "worker", worker, "--hours", "40", "--start", "2025-06-02",
        ])
        .assert()
        .success();

    for args in [
        [worker, "2025-06-02", "in", "09:00"],
        [worker, "2025-06-02", "break-start", "12:00"],
        [worker, "2025-06-02", "break-end", "12:30"],
        [worker, "2025-06-02", "out", "17:00"],
        [worker, "2025-06-03", "in", "09:00"],
        [worker, "2025-06-03", "out", "17:00"],
    ] {
        stly()
            .args(["--db", db_path, "punch"])
            .args(args)
            .assert()
            .success();
    }
}

/// Trigger an engine run with a pinned reference date.
pub fn run_engine(db_path: &str, now: &str) {
    stly()
        .args(["--db", db_path, "run", "--now", now])
        .assert()
        .success();
}
