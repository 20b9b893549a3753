use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_week, run_engine, setup_test_db, stly, temp_out};

#[test]
fn test_export_payroll_csv() {
    let db_path = setup_test_db("export_payroll_csv");
    let out = temp_out("export_payroll", "csv");
    init_db_with_week(&db_path, "w1");
    run_engine(&db_path, "2025-06-08");

    stly()
        .args([
            "--db", &db_path, "export", "--table", "payroll", "--worker", "w1", "--format",
            "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("worker_id,period_start,period_end"));
    assert!(content.contains("w1,2025-06-02,2025-06-08"));
    assert!(content.contains("pending"));
}

#[test]
fn test_export_balances_json() {
    let db_path = setup_test_db("export_balances_json");
    let out = temp_out("export_balances", "json");
    init_db_with_week(&db_path, "w1");
    run_engine(&db_path, "2025-06-08");

    stly()
        .args([
            "--db", &db_path, "export", "--table", "balances", "--worker", "w1", "--format",
            "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of balances");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["worker_id"], "w1");
    assert_eq!(rows[0]["last_accrued_week"], "2025-06-02");
}

#[test]
fn test_export_daily_requires_week() {
    let db_path = setup_test_db("export_daily_noweek");
    let out = temp_out("export_daily_noweek", "csv");
    init_db_with_week(&db_path, "w1");
    run_engine(&db_path, "2025-06-08");

    stly()
        .args([
            "--db", &db_path, "export", "--table", "daily", "--worker", "w1", "--file", &out,
        ])
        .assert()
        .failure()
        .stderr(contains("--week is required"));
}

#[test]
fn test_export_daily_csv_for_week() {
    let db_path = setup_test_db("export_daily_csv");
    let out = temp_out("export_daily", "csv");
    init_db_with_week(&db_path, "w1");
    run_engine(&db_path, "2025-06-08");

    stly()
        .args([
            "--db", &db_path, "export", "--table", "daily", "--worker", "w1", "--week",
            "2025-06-02", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    // Seven day rows plus the header.
    assert_eq!(content.lines().count(), 8);
    assert!(content.contains("w1,2025-06-02,09:00,17:00,7.50,0.50,7.00"));
}

#[test]
fn test_export_weeks_csv() {
    let db_path = setup_test_db("export_weeks_csv");
    let out = temp_out("export_weeks", "csv");
    init_db_with_week(&db_path, "w1");
    run_engine(&db_path, "2025-06-08");

    stly()
        .args([
            "--db", &db_path, "export", "--table", "weeks", "--worker", "w1", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("w1,2025-06-02,2025-06-08,15.50"));
}
