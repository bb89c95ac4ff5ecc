#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use ecotrack::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn eco() -> Command {
    cargo_bin_cmd!("ecotrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ecotrack.sqlite", name));
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

/// Open a fresh, initialized database through the library API
pub fn open_test_pool(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    DbPool::open(&db_path).expect("open db")
}

/// Initialize DB via CLI and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    eco()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    eco()
        .args(["--db", db_path, "add", "2025-09-01", "car", "10"])
        .assert()
        .success();

    eco()
        .args([
            "--db",
            db_path,
            "add",
            "2025-09-15",
            "bus",
            "10",
            "--hours",
            "1",
            "--note",
            "to the office",
        ])
        .assert()
        .success();
}
