//! Storage port the engine runs against.
//!
//! The engine never touches a concrete connection; it reads punches and
//! contracts and writes computed rows through this trait. The production
//! implementation lives in `db::store` (SQLite); tests may substitute an
//! in-memory implementation to exercise the orchestration without a file.

use crate::core::accrual::WeekAccrual;
use crate::errors::AppResult;
use crate::models::contract::Contract;
use crate::models::payroll::{DailyPayrollDetail, PayrollRecord};
use crate::models::punch::PunchEvent;
use crate::models::weekly_hours::WeeklyHours;
use chrono::NaiveDate;

pub trait EngineStore {
    /// All active contracts, one per worker.
    fn contracts(&mut self) -> AppResult<Vec<Contract>>;

    /// One worker's punches for one calendar date, timestamp ascending.
    fn punches_for_day(&mut self, worker_id: &str, date: NaiveDate)
    -> AppResult<Vec<PunchEvent>>;

    /// True when the worker's idempotency marker already sits at or past
    /// `week_start`. Weeks are processed in ascending order, so a marker
    /// at a later week means this one has been accrued too.
    fn week_already_accrued(&mut self, worker_id: &str, week_start: NaiveDate)
    -> AppResult<bool>;

    /// Overwrite-or-insert the weekly total for (worker, week_start).
    fn upsert_weekly_hours(&mut self, row: &WeeklyHours) -> AppResult<()>;

    /// Add one week's accrual to every category balance and move the
    /// idempotency marker to `week_start`. Additive, never absolute, and
    /// atomic: either all category rows advance together or none do, so a
    /// partial write can never leave the marker stamped for a week whose
    /// categories were only half accrued.
    fn add_week_accrual(
        &mut self,
        worker_id: &str,
        accrual: &WeekAccrual,
        week_start: NaiveDate,
    ) -> AppResult<()>;

    /// Overwrite-or-insert the payroll record for (worker, period_start).
    fn upsert_payroll(&mut self, row: &PayrollRecord) -> AppResult<()>;

    /// Overwrite-or-insert one daily payroll line for (worker, date).
    fn upsert_daily_detail(&mut self, row: &DailyPayrollDetail) -> AppResult<()>;
}
