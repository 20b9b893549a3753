use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::runlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_contracts, upsert_contract};
use crate::errors::{AppError, AppResult};
use crate::models::contract::Contract;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::fmt_hours;
use crate::utils::table::{Column, Table};

/// Register a worker contract or list all registered workers.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Worker {
        id,
        hours,
        start,
        list,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *list {
            let contracts = load_contracts(&mut pool)?;

            if contracts.is_empty() {
                println!("No workers registered.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("WORKER", 14),
                Column::new("HOURS/WEEK", 10),
                Column::new("START", 10),
            ]);
            for c in contracts {
                table.add_row(vec![
                    c.worker_id,
                    fmt_hours(c.required_weekly_hours),
                    c.employment_start.to_string(),
                ]);
            }
            print!("{}", table.render());
            return Ok(());
        }

        let worker_id = id
            .as_ref()
            .ok_or_else(|| AppError::InvalidWorker("missing worker id".to_string()))?;
        let required = hours.ok_or_else(|| {
            AppError::InvalidWorker(format!("{}: missing --hours", worker_id))
        })?;
        let start_str = start.as_ref().ok_or_else(|| {
            AppError::InvalidWorker(format!("{}: missing --start", worker_id))
        })?;

        let contract = Contract {
            worker_id: worker_id.clone(),
            required_weekly_hours: required,
            employment_start: date::parse_required_date(start_str)?,
        };

        upsert_contract(&pool.conn, &contract)?;
        runlog(
            &pool.conn,
            "worker:add",
            worker_id,
            &format!("hours={} start={}", required, start_str),
        )?;
        success(format!("Worker {} registered", worker_id));
    }
    Ok(())
}
