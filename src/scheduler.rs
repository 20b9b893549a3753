//! Weekly scheduler collaborator.
//!
//! Computes the next fire instant from the configured weekday and time
//! and invokes the same `RunLogic::execute` entry point the on-demand
//! `run` command uses. The loop never aborts a run in progress; a slow
//! run simply delays the next tick.

use crate::config::Config;
use crate::core::run::RunLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success};
use crate::utils::date::parse_weekday;
use crate::utils::time::parse_time;
use chrono::{Datelike, Days, Local, NaiveDateTime, NaiveTime, Weekday};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct Schedule {
    pub weekday: Weekday,
    pub at: NaiveTime,
}

impl Schedule {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let weekday = parse_weekday(&cfg.schedule_weekday)
            .ok_or_else(|| AppError::Config(format!("Invalid weekday: {}", cfg.schedule_weekday)))?;
        let at = parse_time(&cfg.schedule_time)
            .ok_or_else(|| AppError::InvalidTime(cfg.schedule_time.clone()))?;
        Ok(Self { weekday, at })
    }

    /// The first instant strictly after `now` that lands on the
    /// configured weekday and time.
    pub fn next_fire_after(&self, now: NaiveDateTime) -> NaiveDateTime {
        let days_ahead = (self.weekday.num_days_from_monday() as i64
            - now.weekday().num_days_from_monday() as i64)
            .rem_euclid(7) as u64;

        let candidate = (now.date() + Days::new(days_ahead)).and_time(self.at);

        if candidate > now {
            candidate
        } else {
            (candidate.date() + Days::new(7)).and_time(self.at)
        }
    }
}

/// Blocking scheduler loop: sleep until the next fire instant, run the
/// engine, repeat. `max_runs` bounds the loop for tests; `None` runs
/// forever.
pub fn run_loop(cfg: &Config, max_runs: Option<u32>) -> AppResult<()> {
    let schedule = Schedule::from_config(cfg)?;
    let mut runs = 0;

    loop {
        if let Some(max) = max_runs
            && runs >= max
        {
            return Ok(());
        }

        let now = Local::now().naive_local();
        let fire_at = schedule.next_fire_after(now);
        let wait = (fire_at - now).to_std().unwrap_or(Duration::ZERO);

        info(format!("Next aggregation run at {}", fire_at));
        thread::sleep(wait);

        match RunLogic::execute(cfg, Local::now().date_naive()) {
            Ok(summary) => success(format!(
                "Scheduled run done: processed={} skipped={} failed={}",
                summary.processed, summary.skipped, summary.failed
            )),
            // A failed run is logged and the loop keeps going; the next
            // tick will pick up where the idempotency markers left off.
            Err(e) => error(format!("Scheduled run failed: {}", e)),
        }

        runs += 1;
    }
}
