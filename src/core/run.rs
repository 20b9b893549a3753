//! Shared "run the engine once" logic.
//!
//! Both triggers (the `run` CLI command and the scheduler loop) come
//! through here, so there is exactly one code path for an engine run.

use crate::config::Config;
use crate::core::accrual::AccrualRates;
use crate::core::engine::{Engine, EngineSettings, RunSummary};
use crate::core::payroll::PayRules;
use crate::db::initialize::init_db;
use crate::db::log::runlog;
use crate::db::pool::DbPool;
use crate::db::queries::load_contract;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub struct RunLogic;

impl RunLogic {
    pub fn settings(cfg: &Config) -> EngineSettings {
        EngineSettings {
            standard_week_hours: cfg.standard_week_hours,
            rates: AccrualRates {
                annual_per_week: cfg.annual_leave_rate,
                personal_per_week: cfg.personal_leave_rate,
            },
            pay_rules: PayRules {
                bonus_amount: cfg.bonus_amount,
                deduction_amount: cfg.deduction_amount,
                payout_offset_days: cfg.payout_offset_days,
            },
            retry_attempts: cfg.retry_attempts,
            retry_backoff_ms: cfg.retry_backoff_ms,
        }
    }

    /// Run the full-population aggregation against the configured
    /// database and record per-worker outcomes in the run log.
    pub fn execute(cfg: &Config, now: NaiveDate) -> AppResult<RunSummary> {
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let settings = Self::settings(cfg);
        let summary = {
            let mut store = SqliteStore::new(&mut pool);
            let mut engine = Engine::new(&mut store, settings);
            engine.run_all(now)?
        };

        for (worker, reason) in &summary.skipped_workers {
            runlog(&pool.conn, "run:skip", worker, reason)?;
        }
        for failure in &summary.failures {
            let week = failure
                .week
                .map(|w| w.to_string())
                .unwrap_or_else(|| "-".to_string());
            runlog(
                &pool.conn,
                "run:fail",
                &failure.worker_id,
                &format!("week {}: {}", week, failure.cause),
            )?;
        }
        runlog(
            &pool.conn,
            "run",
            "all",
            &format!(
                "processed={} skipped={} failed={} (as of {})",
                summary.processed, summary.skipped, summary.failed, now
            ),
        )?;

        Ok(summary)
    }

    /// Run the aggregation for a single worker, same pipeline as the
    /// full run. Used by `run --worker` to retry one failed worker.
    pub fn execute_worker(cfg: &Config, worker_id: &str, now: NaiveDate) -> AppResult<usize> {
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let contract = load_contract(&mut pool, worker_id)?;
        if !contract.is_valid() {
            return Err(AppError::InvalidWorker(worker_id.to_string()));
        }

        let settings = Self::settings(cfg);
        let result = {
            let mut store = SqliteStore::new(&mut pool);
            let mut engine = Engine::new(&mut store, settings);
            engine.run_worker(&contract, now)
        };

        match result {
            Ok(weeks) => {
                runlog(
                    &pool.conn,
                    "run:worker",
                    worker_id,
                    &format!("weeks={} (as of {})", weeks, now),
                )?;
                Ok(weeks)
            }
            Err(failure) => {
                let week = failure
                    .week
                    .map(|w| w.to_string())
                    .unwrap_or_else(|| "-".to_string());
                runlog(
                    &pool.conn,
                    "run:fail",
                    worker_id,
                    &format!("week {}: {}", week, failure.cause),
                )?;
                Err(AppError::RetriesExhausted {
                    worker: failure.worker_id,
                    week,
                    cause: failure.cause,
                })
            }
        }
    }
}
