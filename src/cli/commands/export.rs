use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{
    load_balances, load_daily_details, load_payroll_records, load_weekly_hours,
};
use crate::errors::{AppError, AppResult};
use crate::export::{
    ExportFormat, ExportTable, notify_export_success, write_balances_csv, write_details_csv,
    write_json, write_payroll_csv, write_weeks_csv,
};
use crate::utils::date::parse_required_date;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        table,
        worker,
        format,
        file,
        week,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        match table {
            ExportTable::Payroll => {
                let rows = load_payroll_records(&mut pool, worker)?;
                match format {
                    ExportFormat::Csv => write_payroll_csv(file, &rows)?,
                    ExportFormat::Json => write_json(file, &rows)?,
                }
                notify_export_success("Payroll", Path::new(file));
            }
            ExportTable::Daily => {
                let week_str = week.as_ref().ok_or_else(|| {
                    AppError::Export("--week is required for the daily table".to_string())
                })?;
                let week_start = parse_required_date(week_str)?;
                let rows = load_daily_details(&mut pool, worker, week_start)?;
                match format {
                    ExportFormat::Csv => write_details_csv(file, &rows)?,
                    ExportFormat::Json => write_json(file, &rows)?,
                }
                notify_export_success("Daily payroll", Path::new(file));
            }
            ExportTable::Balances => {
                let rows = load_balances(&mut pool, worker)?;
                match format {
                    ExportFormat::Csv => write_balances_csv(file, &rows)?,
                    ExportFormat::Json => write_json(file, &rows)?,
                }
                notify_export_success("Balances", Path::new(file));
            }
            ExportTable::Weeks => {
                let rows = load_weekly_hours(&mut pool, worker)?;
                match format {
                    ExportFormat::Csv => write_weeks_csv(file, &rows)?,
                    ExportFormat::Json => write_json(file, &rows)?,
                }
                notify_export_success("Weekly hours", Path::new(file));
            }
        }
    }
    Ok(())
}
