use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_weekly_hours;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::fmt_hours;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Weeks { worker } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let rows = load_weekly_hours(&mut pool, worker)?;

        if rows.is_empty() {
            println!("No weekly totals for {}.", worker);
            return Ok(());
        }

        header(format!("Weekly hours for {}", worker));
        let mut table = Table::new(vec![
            Column::new("WEEK START", 10),
            Column::new("WEEK END", 10),
            Column::new("HOURS", 7),
        ]);
        for w in rows {
            table.add_row(vec![
                w.week_start.to_string(),
                w.week_end.to_string(),
                fmt_hours(w.total_hours),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
