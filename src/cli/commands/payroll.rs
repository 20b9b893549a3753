use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_daily_details, load_payroll_records};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date::parse_required_date;
use crate::utils::formatting::{fmt_amount, fmt_hours};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Payroll { worker, week } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(week_str) = week {
            let week_start = parse_required_date(week_str)?;
            let details = load_daily_details(&mut pool, worker, week_start)?;

            if details.is_empty() {
                println!("No daily rows for {} week {}.", worker, week_start);
                return Ok(());
            }

            header(format!("Daily breakdown for {}, week {}", worker, week_start));
            let mut table = Table::new(vec![
                Column::new("DATE", 10),
                Column::new("START", 5),
                Column::new("FINISH", 6),
                Column::new("WORKED", 7),
                Column::new("BREAK", 6),
                Column::new("BASE", 7),
            ]);
            for d in details {
                table.add_row(vec![
                    d.date.to_string(),
                    d.start.map(|t| t.format("%H:%M").to_string()).unwrap_or_else(|| "-".into()),
                    d.finish.map(|t| t.format("%H:%M").to_string()).unwrap_or_else(|| "-".into()),
                    fmt_hours(d.worked_hours),
                    fmt_hours(d.break_hours),
                    fmt_amount(d.base_salary),
                ]);
            }
            print!("{}", table.render());
            return Ok(());
        }

        let records = load_payroll_records(&mut pool, worker)?;

        if records.is_empty() {
            println!("No payroll records for {}.", worker);
            return Ok(());
        }

        header(format!("Payroll for {}", worker));
        let mut table = Table::new(vec![
            Column::new("PERIOD", 24),
            Column::new("TOTAL", 8),
            Column::new("BONUS", 6),
            Column::new("DEDUCT", 6),
            Column::new("STATUS", 7),
            Column::new("EXPECTED", 10),
        ]);
        for r in records {
            table.add_row(vec![
                format!("{} -> {}", r.period_start, r.period_end),
                fmt_amount(r.total_amount),
                fmt_amount(r.bonus),
                fmt_amount(r.deductions),
                r.status.to_db_str().to_string(),
                r.expected_date.to_string(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
