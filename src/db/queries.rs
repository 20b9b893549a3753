use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::balance::{LeaveBalance, LeaveCategory};
use crate::models::contract::Contract;
use crate::models::payroll::{DailyPayrollDetail, PayrollRecord, PayrollStatus};
use crate::models::punch::PunchEvent;
use crate::models::punch_kind::PunchKind;
use crate::models::weekly_hours::WeeklyHours;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

// ---------------------------------------------------------------------
// Column helpers
// ---------------------------------------------------------------------

fn parse_date_col(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s.to_string())),
        )
    })
}

fn parse_time_col(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(s.to_string())),
        )
    })
}

fn parse_opt_date_col(v: Option<String>) -> Result<Option<NaiveDate>> {
    match v {
        Some(s) if !s.is_empty() => Ok(Some(parse_date_col(&s)?)),
        _ => Ok(None),
    }
}

fn parse_opt_time_col(v: Option<String>) -> Result<Option<NaiveTime>> {
    match v {
        Some(s) if !s.is_empty() => Ok(Some(parse_time_col(&s)?)),
        _ => Ok(None),
    }
}

// ---------------------------------------------------------------------
// Punches
// ---------------------------------------------------------------------

pub fn map_punch_row(row: &Row) -> Result<PunchEvent> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    let kind_str: String = row.get("kind")?;
    let kind = PunchKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidPunchKind(kind_str.clone())),
        )
    })?;

    Ok(PunchEvent {
        id: row.get("id")?,
        worker_id: row.get("worker_id")?,
        date: parse_date_col(&date_str)?,
        time: parse_time_col(&time_str)?,
        kind,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_punch(conn: &Connection, punch: &PunchEvent) -> AppResult<()> {
    conn.execute(
        "INSERT INTO punches (worker_id, date, time, kind, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            punch.worker_id,
            punch.date_str(),
            punch.time_str(),
            punch.kind.to_db_str(),
            punch.source,
            punch.created_at,
        ],
    )?;
    Ok(())
}

pub fn load_punches_for_day(
    pool: &mut DbPool,
    worker_id: &str,
    date: NaiveDate,
) -> AppResult<Vec<PunchEvent>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM punches
         WHERE worker_id = ?1 AND date = ?2
         ORDER BY time ASC, id ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map(params![worker_id, date_str], map_punch_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------
// Workers / contracts
// ---------------------------------------------------------------------

pub fn map_contract_row(row: &Row) -> Result<Contract> {
    let start_str: String = row.get("employment_start")?;

    Ok(Contract {
        worker_id: row.get("worker_id")?,
        required_weekly_hours: row.get("required_weekly_hours")?,
        employment_start: parse_date_col(&start_str)?,
    })
}

/// Register or update a worker's active contract. One row per worker.
pub fn upsert_contract(conn: &Connection, contract: &Contract) -> AppResult<()> {
    conn.execute(
        "INSERT INTO workers (worker_id, required_weekly_hours, employment_start)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(worker_id) DO UPDATE SET
             required_weekly_hours = excluded.required_weekly_hours,
             employment_start = excluded.employment_start",
        params![
            contract.worker_id,
            contract.required_weekly_hours,
            contract.employment_start.format("%Y-%m-%d").to_string(),
        ],
    )?;
    Ok(())
}

pub fn load_contracts(pool: &mut DbPool) -> AppResult<Vec<Contract>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM workers ORDER BY worker_id ASC")?;

    let rows = stmt.query_map([], map_contract_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_contract(pool: &mut DbPool, worker_id: &str) -> AppResult<Contract> {
    let mut stmt = pool.conn.prepare("SELECT * FROM workers WHERE worker_id = ?1")?;

    let mut rows = stmt.query_map([worker_id], map_contract_row)?;
    match rows.next() {
        Some(r) => Ok(r?),
        None => Err(AppError::NoContract(worker_id.to_string())),
    }
}

// ---------------------------------------------------------------------
// Engine outputs (read side for list/show/export commands)
// ---------------------------------------------------------------------

pub fn load_weekly_hours(pool: &mut DbPool, worker_id: &str) -> AppResult<Vec<WeeklyHours>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM weekly_hours
         WHERE worker_id = ?1
         ORDER BY week_start ASC",
    )?;

    let rows = stmt.query_map([worker_id], |row| {
        let start: String = row.get("week_start")?;
        let end: String = row.get("week_end")?;
        Ok(WeeklyHours {
            worker_id: row.get("worker_id")?,
            week_start: parse_date_col(&start)?,
            week_end: parse_date_col(&end)?,
            total_hours: row.get("total_hours")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_balances(pool: &mut DbPool, worker_id: &str) -> AppResult<Vec<LeaveBalance>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM leave_balances
         WHERE worker_id = ?1
         ORDER BY category ASC",
    )?;

    let rows = stmt.query_map([worker_id], |row| {
        let cat_str: String = row.get("category")?;
        let category = LeaveCategory::from_db_str(&cat_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidCategory(cat_str.clone())),
            )
        })?;

        let marker: Option<String> = row.get("last_accrued_week")?;

        Ok(LeaveBalance {
            worker_id: row.get("worker_id")?,
            category,
            accrued_hours: row.get("accrued_hours")?,
            last_accrued_week: parse_opt_date_col(marker)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_payroll_row(row: &Row) -> Result<PayrollRecord> {
    let start: String = row.get("period_start")?;
    let end: String = row.get("period_end")?;
    let expected: String = row.get("expected_date")?;

    let status_str: String = row.get("status")?;
    let status = PayrollStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("Invalid status: {}", status_str))),
        )
    })?;

    Ok(PayrollRecord {
        worker_id: row.get("worker_id")?,
        period_start: parse_date_col(&start)?,
        period_end: parse_date_col(&end)?,
        bonus: row.get("bonus")?,
        deductions: row.get("deductions")?,
        total_amount: row.get("total_amount")?,
        status,
        expected_date: parse_date_col(&expected)?,
    })
}

pub fn load_payroll_records(pool: &mut DbPool, worker_id: &str) -> AppResult<Vec<PayrollRecord>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM payroll_records
         WHERE worker_id = ?1
         ORDER BY period_start ASC",
    )?;

    let rows = stmt.query_map([worker_id], map_payroll_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_daily_detail_row(row: &Row) -> Result<DailyPayrollDetail> {
    let date: String = row.get("date")?;
    let week_start: String = row.get("week_start")?;
    let week_end: String = row.get("week_end")?;
    let start: Option<String> = row.get("start")?;
    let finish: Option<String> = row.get("finish")?;

    Ok(DailyPayrollDetail {
        worker_id: row.get("worker_id")?,
        date: parse_date_col(&date)?,
        start: parse_opt_time_col(start)?,
        finish: parse_opt_time_col(finish)?,
        worked_hours: row.get("worked_hours")?,
        break_hours: row.get("break_hours")?,
        base_salary: row.get("base_salary")?,
        week_start: parse_date_col(&week_start)?,
        week_end: parse_date_col(&week_end)?,
    })
}

pub fn load_daily_details(
    pool: &mut DbPool,
    worker_id: &str,
    week_start: NaiveDate,
) -> AppResult<Vec<DailyPayrollDetail>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM payroll_daily
         WHERE worker_id = ?1 AND week_start = ?2
         ORDER BY date ASC",
    )?;

    let week_str = week_start.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map(params![worker_id, week_str], map_daily_detail_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_log(pool: &mut DbPool) -> Result<Vec<(String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT date, target, message FROM log ORDER BY date DESC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
