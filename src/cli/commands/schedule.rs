use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::run::RunLogic;
use crate::errors::AppResult;
use crate::scheduler;
use crate::ui::messages::success;
use crate::utils::date::today;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule { once } = cmd {
        if *once {
            let summary = RunLogic::execute(cfg, today())?;
            success(format!(
                "Run complete: processed={} skipped={} failed={}",
                summary.processed, summary.skipped, summary.failed
            ));
            return Ok(());
        }

        scheduler::run_loop(cfg, None)?;
    }
    Ok(())
}
