use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::accrual::{AccrualRates, accrue_week, format_leave, hours_to_minutes};
use crate::db::pool::DbPool;
use crate::db::queries::{load_balances, load_contract};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};

/// Show a worker's accrued balances, or preview one week's accrual
/// against the worker's own contractual hours. The org-wide standard
/// week is only used as a denominator by the batch run.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Balance {
        worker,
        preview_week,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(effective_hours) = preview_week {
            let contract = load_contract(&mut pool, worker)?;
            let rates = AccrualRates {
                annual_per_week: cfg.annual_leave_rate,
                personal_per_week: cfg.personal_leave_rate,
            };
            let accrual = accrue_week(
                *effective_hours,
                contract.required_weekly_hours,
                &rates,
            );

            header(format!("Accrual preview for {}", worker));
            println!(
                "Effective hours: {:.2} of {:.2} contractual",
                effective_hours, contract.required_weekly_hours
            );
            println!(
                "Annual leave:   {:.4} h ({} min)",
                accrual.annual_hours,
                hours_to_minutes(accrual.annual_hours)
            );
            println!(
                "Personal leave: {:.4} h ({} min)",
                accrual.personal_hours,
                hours_to_minutes(accrual.personal_hours)
            );
            return Ok(());
        }

        let balances = load_balances(&mut pool, worker)?;

        if balances.is_empty() {
            println!("No balances for {}.", worker);
            return Ok(());
        }

        header(format!("Leave balances for {}", worker));
        let mut table = Table::new(vec![
            Column::new("CATEGORY", 14),
            Column::new("ACCRUED (H)", 12),
            Column::new("AS D/H/M", 12),
            Column::new("LAST WEEK", 10),
        ]);
        for b in balances {
            table.add_row(vec![
                b.category.label().to_string(),
                format!("{:.4}", b.accrued_hours),
                format_leave(b.accrued_hours, cfg.leave_day_hours),
                b.last_accrued_week
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
