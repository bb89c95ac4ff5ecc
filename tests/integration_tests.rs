use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{eco, init_db_with_data, setup_test_db, temp_out};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    eco()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('logs','audit_log')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 2);
}

#[test]
fn test_add_and_list() {
    let db_path = setup_test_db("cli_add_list");
    init_db_with_data(&db_path);

    eco()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("Travel: Car"))
        .stdout(contains("1.920 kg"))
        .stdout(contains("2025-09-15"))
        .stdout(contains("1.150 kg"))
        .stdout(contains("to the office"));
}

#[test]
fn test_list_filter_by_date() {
    let db_path = setup_test_db("cli_list_date");
    init_db_with_data(&db_path);

    eco()
        .args(["--db", &db_path, "list", "--date", "2025-09-15"])
        .assert()
        .success()
        .stdout(contains("2025-09-15"))
        .stdout(contains("2025-09-01").not());

    eco()
        .args(["--db", &db_path, "list", "--date", "2025-09-02"])
        .assert()
        .success()
        .stdout(contains("No entries for 2025-09-02"));
}

#[test]
fn test_list_today_conflicts_with_date() {
    let db_path = setup_test_db("cli_list_today_date");
    init_db_with_data(&db_path);

    eco()
        .args(["--db", &db_path, "list", "--today", "--date", "2025-09-15"])
        .assert()
        .failure()
        .stderr(contains("cannot be used with"));
}

#[test]
fn test_add_rejects_invalid_input() {
    let db_path = setup_test_db("cli_add_invalid");
    eco()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    eco()
        .args(["--db", &db_path, "add", "2025-09-01", "car", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    eco()
        .args(["--db", &db_path, "add", "2025-09-01", "car", "-4"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    eco()
        .args(["--db", &db_path, "add", "2025-09-01", "plane", "100"])
        .assert()
        .failure()
        .stderr(contains("Invalid category"));

    eco()
        .args([
            "--db",
            &db_path,
            "add",
            "2025-09-01",
            "bus",
            "5",
            "--hours",
            "half",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid duration"));

    eco()
        .args(["--db", &db_path, "add", "09/01/2025", "bus", "5"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    eco()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries recorded yet."));
}

#[test]
fn test_delete_with_confirmation() {
    let db_path = setup_test_db("cli_del");
    init_db_with_data(&db_path);

    // answer "n": nothing happens
    eco()
        .args(["--db", &db_path, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    eco()
        .args(["--db", &db_path, "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Entry #1 for 2025-09-01 has been deleted"));

    eco()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01").not())
        .stdout(contains("2025-09-15"));

    eco()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No log entry with id 1"));
}

#[test]
fn test_summary_and_streak() {
    let db_path = setup_test_db("cli_summary");
    init_db_with_data(&db_path);

    eco()
        .args(["--db", &db_path, "add", "2025-09-14", "train", "20"])
        .assert()
        .success();

    eco()
        .args(["--db", &db_path, "summary", "--date", "2025-09-15"])
        .assert()
        .success()
        .stdout(contains("Total:  1.150 kg"))
        .stdout(contains("LOW"))
        .stdout(contains("Streak: 2 day(s)"));

    eco()
        .args(["--db", &db_path, "streak", "--date", "2025-09-16"])
        .assert()
        .success()
        .stdout(contains("Streak: 0 days"));

    eco()
        .args(["--db", &db_path, "streak", "--date", "2025-09-15"])
        .assert()
        .success()
        .stdout(contains("Streak: 2 day(s) ending 2025-09-15"));
}

#[test]
fn test_factors_table() {
    eco()
        .args(["factors"])
        .assert()
        .success()
        .stdout(contains("Travel: Car"))
        .stdout(contains("0.192/km"))
        .stdout(contains("Travel: Metro or Train"));
}

#[test]
fn test_quiz_with_answers() {
    eco()
        .args(["quiz", "--answers", "4,5,3,2,5"])
        .assert()
        .success()
        .stdout(contains("3.8"))
        .stdout(contains("Open to change"));

    eco()
        .args(["quiz", "--answers", "4,9"])
        .assert()
        .failure()
        .stderr(contains("Invalid quiz answer"));
}

#[test]
fn test_quiz_interactive() {
    eco()
        .args(["quiz"])
        .write_stdin("5\nmaybe\n5\n4\n5\n5\n")
        .assert()
        .success()
        .stdout(contains("Eco enthusiast"));
}

#[test]
fn test_log_print_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);

    eco()
        .args(["--db", &db_path, "del", "2", "-y"])
        .assert()
        .success();

    eco()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("del"))
        .stdout(contains("Travel: Bus"));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("cli_export");
    init_db_with_data(&db_path);

    let csv_out = temp_out("cli_export", "csv");
    eco()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &csv_out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&csv_out).expect("read exported csv");
    assert!(content.starts_with("id,date,category,amount,unit,duration_hours,kg_co2,note"));
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("to the office"));

    let json_out = temp_out("cli_export", "json");
    eco()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &json_out, "--range",
            "2025-09-10:2025-09-20",
        ])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["date"], "2025-09-15");
    assert_eq!(rows[0]["kg_co2"], 1.15);
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("cli_export_force");
    init_db_with_data(&db_path);

    let out = temp_out("cli_export_force", "csv");
    fs::write(&out, "keep me").unwrap();

    eco()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    eco()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("2025-09-15"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("cli_backup");
    init_db_with_data(&db_path);

    let plain = temp_out("cli_backup", "sqlite");
    eco()
        .args(["--db", &db_path, "backup", "--file", &plain])
        .assert()
        .success();
    assert!(fs::metadata(&plain).unwrap().len() > 0);

    eco()
        .args(["--db", &db_path, "backup", "--file", &plain])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    let zipped = temp_out("cli_backup_zip", "sqlite");
    let zip_path = zipped.replace(".sqlite", ".zip");
    fs::remove_file(&zip_path).ok();

    eco()
        .args(["--db", &db_path, "backup", "--file", &zipped, "--compress"])
        .assert()
        .success();
    assert!(fs::metadata(&zip_path).is_ok());
    assert!(fs::metadata(&zipped).is_err());
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_db_with_data(&db_path);

    eco()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total entries:"))
        .stdout(contains("3.070 kg"))
        .stdout(contains("Integrity check passed"));
}
