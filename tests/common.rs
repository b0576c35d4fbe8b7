#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, Utc};
use rtimesheet::db::initialize::init_db;
use rtimesheet::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.sqlite", name));
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

/// Run one subcommand against `db_path` in UTC at instant `at`.
pub fn rts_at(db_path: &str, at: &str) -> Command {
    let mut cmd = rts();
    cmd.args(["--db", db_path, "--tz", "+00:00", "--at", at]);
    cmd
}

/// Initialize DB and record one full day on 2025-01-24 (UTC):
/// in 09:00, break 12:00-13:00, out 21:00 → 660 worked, 180 overtime.
pub fn init_db_with_day(db_path: &str) {
    rts()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (cmd, at) in [
        ("clock-in", "2025-01-24T09:00:00Z"),
        ("break-start", "2025-01-24T12:00:00Z"),
        ("break-end", "2025-01-24T13:00:00Z"),
        ("clock-out", "2025-01-24T21:00:00Z"),
    ] {
        rts_at(db_path, at).arg(cmd).assert().success();
    }
}

/// In-memory database with the schema applied.
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

pub fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid RFC 3339")
        .with_timezone(&Utc)
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}
