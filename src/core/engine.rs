//! Engine orchestrator: owns sequencing and I/O, delegates all math to
//! the pure calculators (reducer, aggregator, accrual, payroll).
//!
//! Per worker, weeks are processed in ascending order so the accrual
//! marker always reflects the most recently completed week. Failures are
//! per-worker: one worker aborting never rolls back or blocks the rest.

use crate::core::accrual::{AccrualRates, accrue_week};
use crate::core::aggregator::aggregate_week;
use crate::core::bucketer::week_windows;
use crate::core::payroll::{PayRules, compose_week};
use crate::core::reducer::reduce_day;
use crate::core::store::EngineStore;
use crate::errors::{AppError, AppResult};
use crate::models::contract::Contract;
use crate::models::session::DailySession;
use crate::models::week::WeekWindow;
use crate::models::weekly_hours::WeeklyHours;
use chrono::NaiveDate;
use std::thread;
use std::time::Duration;

/// Tunables the orchestrator needs; normally filled from `Config`.
#[derive(Debug, Clone, Copy)]
pub struct EngineSettings {
    /// Organisation-wide standard full-time week, the accrual denominator
    /// in the batch path.
    pub standard_week_hours: f64,
    pub rates: AccrualRates,
    pub pay_rules: PayRules,
    pub retry_attempts: u32,
    pub retry_backoff_ms: u64,
}

/// Why one worker's run stopped, with enough context to retry just them.
#[derive(Debug, Clone)]
pub struct WorkerFailure {
    pub worker_id: String,
    pub week: Option<NaiveDate>,
    pub cause: String,
}

/// What the triggering caller gets back, whether scheduled or on-demand.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub skipped_workers: Vec<(String, String)>, // (worker_id, reason)
    pub failures: Vec<WorkerFailure>,
}

pub struct Engine<'a, S: EngineStore> {
    store: &'a mut S,
    settings: EngineSettings,
}

impl<'a, S: EngineStore> Engine<'a, S> {
    pub fn new(store: &'a mut S, settings: EngineSettings) -> Self {
        Self { store, settings }
    }

    /// Process every worker with an active contract up to `now`.
    /// This is the single entry point shared by the scheduler and the
    /// on-demand administrative trigger.
    pub fn run_all(&mut self, now: NaiveDate) -> AppResult<RunSummary> {
        let contracts = self.store.contracts()?;
        let mut summary = RunSummary::default();

        for contract in &contracts {
            if !contract.is_valid() {
                summary.skipped += 1;
                summary.skipped_workers.push((
                    contract.worker_id.clone(),
                    "invalid contract (missing id or non-positive weekly hours)".to_string(),
                ));
                continue;
            }

            match self.run_worker(contract, now) {
                Ok(0) => {
                    summary.skipped += 1;
                    summary.skipped_workers.push((
                        contract.worker_id.clone(),
                        format!("employment starts in the future ({})", contract.employment_start),
                    ));
                }
                Ok(_) => summary.processed += 1,
                Err(failure) => {
                    summary.failed += 1;
                    summary.failures.push(failure);
                }
            }
        }

        Ok(summary)
    }

    /// Process one worker's weeks in chronological order.
    /// Returns the number of weeks visited; zero means a future start
    /// date produced no windows at all.
    pub fn run_worker(
        &mut self,
        contract: &Contract,
        now: NaiveDate,
    ) -> Result<usize, WorkerFailure> {
        let mut weeks = 0;

        for window in week_windows(contract.employment_start, now) {
            self.process_week(contract, &window, now)
                .map_err(|e| WorkerFailure {
                    worker_id: contract.worker_id.clone(),
                    week: Some(window.start),
                    cause: e.to_string(),
                })?;
            weeks += 1;
        }

        Ok(weeks)
    }

    fn process_week(
        &mut self,
        contract: &Contract,
        window: &WeekWindow,
        now: NaiveDate,
    ) -> AppResult<()> {
        let attempts = self.settings.retry_attempts;
        let backoff = self.settings.retry_backoff_ms;
        let store = &mut *self.store;

        // 1. Reduce the seven days.
        let mut sessions: Vec<DailySession> = Vec::with_capacity(7);
        for day in window.days() {
            let punches = with_retry(attempts, backoff, || {
                store.punches_for_day(&contract.worker_id, day)
            })?;
            sessions.push(reduce_day(&contract.worker_id, day, &punches));
        }

        // 2. Aggregate and upsert the weekly total. The upsert is
        //    naturally idempotent; it runs on every pass.
        let totals = aggregate_week(&sessions, contract.required_weekly_hours);
        let weekly = WeeklyHours {
            worker_id: contract.worker_id.clone(),
            week_start: window.start,
            week_end: window.end,
            total_hours: totals.total_hours,
        };
        with_retry(attempts, backoff, || store.upsert_weekly_hours(&weekly))?;

        // 3. Accrue, unless the marker already covers this week. Accrual
        //    is additive, so the guard is what keeps re-runs from
        //    double-counting; weeks run ascending, so a marker at a later
        //    week covers every earlier one too.
        let already = with_retry(attempts, backoff, || {
            store.week_already_accrued(&contract.worker_id, window.start)
        })?;
        if !already {
            let accrual = accrue_week(
                totals.effective_hours,
                self.settings.standard_week_hours,
                &self.settings.rates,
            );
            with_retry(attempts, backoff, || {
                store.add_week_accrual(&contract.worker_id, &accrual, window.start)
            })?;
        }

        // 4. Compose payroll. Not guarded: it overwrites absolute values.
        let (record, details) = compose_week(
            &contract.worker_id,
            window,
            &sessions,
            contract.required_weekly_hours,
            &self.settings.pay_rules,
            now,
        );
        for detail in &details {
            with_retry(attempts, backoff, || store.upsert_daily_detail(detail))?;
        }
        with_retry(attempts, backoff, || store.upsert_payroll(&record))?;

        Ok(())
    }
}

/// Retry a storage operation a bounded number of times with linear
/// backoff. Only database errors are considered transient; everything
/// else surfaces immediately.
fn with_retry<T>(
    attempts: u32,
    backoff_ms: u64,
    mut op: impl FnMut() -> AppResult<T>,
) -> AppResult<T> {
    let mut attempt: u32 = 0;

    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(AppError::Db(_)) if attempt + 1 < attempts.max(1) => {
                attempt += 1;
                thread::sleep(Duration::from_millis(backoff_ms * attempt as u64));
            }
            Err(e) => return Err(e),
        }
    }
}
