use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::run::RunLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date::resolve_now;

/// On-demand administrative trigger for the aggregation engine.
/// Uses the same RunLogic entry point as the scheduler.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run { worker, now } = cmd {
        let now = resolve_now(now)?;

        if let Some(worker_id) = worker {
            let weeks = RunLogic::execute_worker(cfg, worker_id, now)?;
            if weeks == 0 {
                warning(format!(
                    "Worker {}: no weeks to process (employment starts in the future)",
                    worker_id
                ));
            } else {
                success(format!("Worker {}: {} week(s) processed", worker_id, weeks));
            }
            return Ok(());
        }

        let summary = RunLogic::execute(cfg, now)?;

        success(format!(
            "Run complete: processed={} skipped={} failed={}",
            summary.processed, summary.skipped, summary.failed
        ));

        for (worker_id, reason) in &summary.skipped_workers {
            warning(format!("skipped {}: {}", worker_id, reason));
        }
        for failure in &summary.failures {
            let week = failure
                .week
                .map(|w| w.to_string())
                .unwrap_or_else(|| "-".to_string());
            warning(format!(
                "failed {}: week {}: {}",
                failure.worker_id, week, failure.cause
            ));
        }
    }
    Ok(())
}
