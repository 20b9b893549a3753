use predicates::str::contains;

mod common;
use common::{init_db_with_week, run_engine, setup_test_db, stly};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    stly()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));
}

#[test]
fn test_worker_register_and_list() {
    let db_path = setup_test_db("worker_list");

    stly()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    stly()
        .args([
            "--db",
            &db_path,
            "worker",
            "alice",
            "--hours",
            "38",
            "--start",
            "2025-06-02",
        ])
        .assert()
        .success();

    stly()
        .args(["--db", &db_path, "worker", "--list"])
        .assert()
        .success()
        .stdout(contains("alice"))
        .stdout(contains("38.00"))
        .stdout(contains("2025-06-02"));
}

#[test]
fn test_punch_rejects_bad_kind() {
    let db_path = setup_test_db("bad_kind");

    stly()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    stly()
        .args(["--db", &db_path, "punch", "w1", "2025-06-02", "nap", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid punch kind"));
}

#[test]
fn test_run_reports_summary_and_populates_tables() {
    let db_path = setup_test_db("run_summary");
    init_db_with_week(&db_path, "w1");

    stly()
        .args(["--db", &db_path, "run", "--now", "2025-06-08"])
        .assert()
        .success()
        .stdout(contains("processed=1"))
        .stdout(contains("failed=0"));

    stly()
        .args(["--db", &db_path, "weeks", "w1"])
        .assert()
        .success()
        .stdout(contains("2025-06-02"))
        .stdout(contains("15.50"));

    stly()
        .args(["--db", &db_path, "balance", "w1"])
        .assert()
        .success()
        .stdout(contains("Annual leave"))
        .stdout(contains("Personal leave"))
        .stdout(contains("2025-06-02"));

    stly()
        .args(["--db", &db_path, "payroll", "w1"])
        .assert()
        .success()
        .stdout(contains("pending"))
        .stdout(contains("15.00"));
}

#[test]
fn test_rerun_does_not_double_accrual() {
    let db_path = setup_test_db("rerun_guard");
    init_db_with_week(&db_path, "w1");

    run_engine(&db_path, "2025-06-08");

    // 15.5 effective hours against the 38 h standard week:
    // 15.5 / 38 * 2.923 = 1.1923 annual hours.
    stly()
        .args(["--db", &db_path, "balance", "w1"])
        .assert()
        .success()
        .stdout(contains("1.1923"));

    run_engine(&db_path, "2025-06-08");

    stly()
        .args(["--db", &db_path, "balance", "w1"])
        .assert()
        .success()
        .stdout(contains("1.1923"));
}

#[test]
fn test_run_single_worker() {
    let db_path = setup_test_db("single_worker");
    init_db_with_week(&db_path, "w1");

    stly()
        .args(["--db", &db_path, "run", "--worker", "w1", "--now", "2025-06-08"])
        .assert()
        .success()
        .stdout(contains("1 week(s) processed"));
}

#[test]
fn test_run_unknown_worker_fails() {
    let db_path = setup_test_db("unknown_worker");

    stly()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    stly()
        .args(["--db", &db_path, "run", "--worker", "ghost", "--now", "2025-06-08"])
        .assert()
        .failure()
        .stderr(contains("No contract found"));
}

#[test]
fn test_future_start_worker_skipped() {
    let db_path = setup_test_db("future_start");

    stly()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    stly()
        .args([
            "--db",
            &db_path,
            "worker",
            "later",
            "--hours",
            "38",
            "--start",
            "2025-09-01",
        ])
        .assert()
        .success();

    stly()
        .args(["--db", &db_path, "run", "--now", "2025-06-08"])
        .assert()
        .success()
        .stdout(contains("skipped=1"));

    stly()
        .args(["--db", &db_path, "weeks", "later"])
        .assert()
        .success()
        .stdout(contains("No weekly totals"));
}

#[test]
fn test_payroll_week_breakdown() {
    let db_path = setup_test_db("daily_breakdown");
    init_db_with_week(&db_path, "w1");
    run_engine(&db_path, "2025-06-08");

    stly()
        .args(["--db", &db_path, "payroll", "w1", "--week", "2025-06-02"])
        .assert()
        .success()
        .stdout(contains("2025-06-02"))
        .stdout(contains("09:00"))
        .stdout(contains("17:00"))
        .stdout(contains("7.50"));
}

#[test]
fn test_balance_preview_uses_contract_hours() {
    let db_path = setup_test_db("preview");
    init_db_with_week(&db_path, "w1"); // 40 h contract

    // 20 effective hours against the worker's own 40 h contract:
    // 20 / 40 * 2.923 = 1.4615 annual hours.
    stly()
        .args(["--db", &db_path, "balance", "w1", "--preview-week", "20"])
        .assert()
        .success()
        .stdout(contains("1.4615"));
}

#[test]
fn test_log_records_run_outcomes() {
    let db_path = setup_test_db("run_log");
    init_db_with_week(&db_path, "w1");
    run_engine(&db_path, "2025-06-08");

    stly()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("processed=1"));
}

#[test]
fn test_db_info_counts_rows() {
    let db_path = setup_test_db("db_info");
    init_db_with_week(&db_path, "w1");
    run_engine(&db_path, "2025-06-08");

    stly()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("punches"))
        .stdout(contains("weekly_hours"));
}
