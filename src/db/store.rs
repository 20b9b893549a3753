//! SQLite implementation of the engine's storage port.
//!
//! Writes use `INSERT ... ON CONFLICT` so that weekly hours, payroll and
//! daily rows are overwrite-on-recompute while accrual stays additive.

use crate::core::accrual::WeekAccrual;
use crate::core::store::EngineStore;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::balance::LeaveCategory;
use crate::models::contract::Contract;
use crate::models::payroll::{DailyPayrollDetail, PayrollRecord};
use crate::models::punch::PunchEvent;
use crate::models::weekly_hours::WeeklyHours;
use chrono::NaiveDate;
use rusqlite::params;

pub struct SqliteStore<'a> {
    pool: &'a mut DbPool,
}

impl<'a> SqliteStore<'a> {
    pub fn new(pool: &'a mut DbPool) -> Self {
        Self { pool }
    }
}

impl EngineStore for SqliteStore<'_> {
    fn contracts(&mut self) -> AppResult<Vec<Contract>> {
        queries::load_contracts(self.pool)
    }

    fn punches_for_day(
        &mut self,
        worker_id: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<PunchEvent>> {
        queries::load_punches_for_day(self.pool, worker_id, date)
    }

    fn week_already_accrued(
        &mut self,
        worker_id: &str,
        week_start: NaiveDate,
    ) -> AppResult<bool> {
        // The marker only moves forward, so any row at or past this week
        // means the week has already been added to the balances.
        let mut stmt = self.pool.conn.prepare_cached(
            "SELECT 1 FROM leave_balances
             WHERE worker_id = ?1 AND last_accrued_week >= ?2
             LIMIT 1",
        )?;

        let week_str = week_start.format("%Y-%m-%d").to_string();
        let exists = stmt.exists(params![worker_id, week_str])?;
        Ok(exists)
    }

    fn upsert_weekly_hours(&mut self, row: &WeeklyHours) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO weekly_hours (worker_id, week_start, week_end, total_hours)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(worker_id, week_start) DO UPDATE SET
                 week_end = excluded.week_end,
                 total_hours = excluded.total_hours",
            params![
                row.worker_id,
                row.week_start.format("%Y-%m-%d").to_string(),
                row.week_end.format("%Y-%m-%d").to_string(),
                row.total_hours,
            ],
        )?;
        Ok(())
    }

    fn add_week_accrual(
        &mut self,
        worker_id: &str,
        accrual: &WeekAccrual,
        week_start: NaiveDate,
    ) -> AppResult<()> {
        let week_str = week_start.format("%Y-%m-%d").to_string();

        // One transaction for the whole week: the marker must never be
        // stamped while a category row is missing its share.
        let tx = self.pool.conn.transaction()?;
        for category in LeaveCategory::ALL {
            tx.execute(
                "INSERT INTO leave_balances (worker_id, category, accrued_hours, last_accrued_week)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(worker_id, category) DO UPDATE SET
                     accrued_hours = accrued_hours + excluded.accrued_hours,
                     last_accrued_week = excluded.last_accrued_week",
                params![
                    worker_id,
                    category.to_db_str(),
                    accrual.hours_for(category),
                    week_str,
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn upsert_payroll(&mut self, row: &PayrollRecord) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO payroll_records
                 (worker_id, period_start, period_end, bonus, deductions,
                  total_amount, status, expected_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(worker_id, period_start) DO UPDATE SET
                 period_end = excluded.period_end,
                 bonus = excluded.bonus,
                 deductions = excluded.deductions,
                 total_amount = excluded.total_amount,
                 status = excluded.status,
                 expected_date = excluded.expected_date",
            params![
                row.worker_id,
                row.period_start.format("%Y-%m-%d").to_string(),
                row.period_end.format("%Y-%m-%d").to_string(),
                row.bonus,
                row.deductions,
                row.total_amount,
                row.status.to_db_str(),
                row.expected_date.format("%Y-%m-%d").to_string(),
            ],
        )?;
        Ok(())
    }

    fn upsert_daily_detail(&mut self, row: &DailyPayrollDetail) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO payroll_daily
                 (worker_id, date, start, finish, worked_hours, break_hours,
                  base_salary, week_start, week_end)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             ON CONFLICT(worker_id, date) DO UPDATE SET
                 start = excluded.start,
                 finish = excluded.finish,
                 worked_hours = excluded.worked_hours,
                 break_hours = excluded.break_hours,
                 base_salary = excluded.base_salary,
                 week_start = excluded.week_start,
                 week_end = excluded.week_end",
            params![
                row.worker_id,
                row.date.format("%Y-%m-%d").to_string(),
                row.start.map(|t| t.format("%H:%M").to_string()),
                row.finish.map(|t| t.format("%H:%M").to_string()),
                row.worked_hours,
                row.break_hours,
                row.base_salary,
                row.week_start.format("%Y-%m-%d").to_string(),
                row.week_end.format("%Y-%m-%d").to_string(),
            ],
        )?;
        Ok(())
    }
}
