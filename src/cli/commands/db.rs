use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        info: show_info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            run_pending_migrations(&pool.conn)?;
            success("Migrations up to date");
        }

        if *check {
            let ok: String = pool
                .conn
                .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
            if ok == "ok" {
                success("Database integrity OK");
            } else {
                crate::ui::messages::warning(format!("Integrity check: {}", ok));
            }
        }

        if *show_info {
            info(format!("Database: {}", cfg.database));
            for table in [
                "workers",
                "punches",
                "weekly_hours",
                "leave_balances",
                "payroll_records",
                "payroll_daily",
            ] {
                let count: i64 = pool.conn.query_row(
                    &format!("SELECT COUNT(*) FROM {}", table),
                    [],
                    |row| row.get(0),
                )?;
                info(format!("{:<16} {} rows", table, count));
            }
        }
    }
    Ok(())
}
