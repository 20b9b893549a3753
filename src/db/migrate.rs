use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure the `workers` contract table exists.
fn ensure_workers_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS workers (
            worker_id             TEXT PRIMARY KEY,
            required_weekly_hours REAL NOT NULL DEFAULT 0,
            employment_start      TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure the append-only `punches` table exists.
fn ensure_punches_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS punches (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id  TEXT NOT NULL,
            date       TEXT NOT NULL,
            time       TEXT NOT NULL,
            kind       TEXT NOT NULL CHECK(kind IN ('check_in','check_out','break_start','break_end')),
            source     TEXT NOT NULL DEFAULT 'cli',
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_punches_worker_date ON punches(worker_id, date, time);
        "#,
    )?;
    Ok(())
}

/// Ensure the engine output tables exist.
fn ensure_output_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS weekly_hours (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id   TEXT NOT NULL,
            week_start  TEXT NOT NULL,
            week_end    TEXT NOT NULL,
            total_hours REAL NOT NULL DEFAULT 0,
            UNIQUE(worker_id, week_start)
        );

        CREATE TABLE IF NOT EXISTS leave_balances (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id         TEXT NOT NULL,
            category          TEXT NOT NULL CHECK(category IN ('annual','personal')),
            accrued_hours     REAL NOT NULL DEFAULT 0,
            last_accrued_week TEXT,
            UNIQUE(worker_id, category)
        );

        CREATE TABLE IF NOT EXISTS payroll_records (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id     TEXT NOT NULL,
            period_start  TEXT NOT NULL,
            period_end    TEXT NOT NULL,
            bonus         REAL NOT NULL DEFAULT 0,
            deductions    REAL NOT NULL DEFAULT 0,
            total_amount  REAL NOT NULL DEFAULT 0,
            status        TEXT NOT NULL DEFAULT 'pending' CHECK(status IN ('pending','paid')),
            expected_date TEXT NOT NULL,
            UNIQUE(worker_id, period_start)
        );

        CREATE TABLE IF NOT EXISTS payroll_daily (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id    TEXT NOT NULL,
            date         TEXT NOT NULL,
            start        TEXT,
            finish       TEXT,
            worked_hours REAL NOT NULL DEFAULT 0,
            break_hours  REAL NOT NULL DEFAULT 0,
            base_salary  REAL NOT NULL DEFAULT 0,
            week_start   TEXT NOT NULL,
            week_end     TEXT NOT NULL,
            UNIQUE(worker_id, date)
        );

        CREATE INDEX IF NOT EXISTS idx_payroll_daily_week ON payroll_daily(worker_id, week_start);
        "#,
    )?;
    Ok(())
}

/// Check if a table exists by name.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `leave_balances` has the `last_accrued_week` column.
fn balances_have_marker_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('leave_balances')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "last_accrued_week" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Add the idempotency-marker column to a pre-marker balances table.
/// Older databases tracked only the running totals.
fn migrate_add_marker_to_balances(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "leave_balances")? {
        return Ok(());
    }

    if balances_have_marker_column(conn)? {
        return Ok(());
    }

    conn.execute_batch("ALTER TABLE leave_balances ADD COLUMN last_accrued_week TEXT;")?;
    Ok(())
}

/// Run all pending schema migrations. Safe to call on every startup.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    ensure_workers_table(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    ensure_punches_table(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    ensure_output_tables(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    migrate_add_marker_to_balances(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    Ok(())
}
