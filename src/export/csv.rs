use crate::models::balance::LeaveBalance;
use crate::models::payroll::{DailyPayrollDetail, PayrollRecord};
use crate::models::weekly_hours::WeeklyHours;
use csv::Writer;

/// Write payroll records as CSV to the given file.
pub fn write_payroll_csv(path: &str, records: &[PayrollRecord]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "worker_id",
        "period_start",
        "period_end",
        "bonus",
        "deductions",
        "total_amount",
        "status",
        "expected_date",
    ])?;

    for rec in records {
        wtr.write_record(&[
            rec.worker_id.clone(),
            rec.period_start.to_string(),
            rec.period_end.to_string(),
            format!("{:.2}", rec.bonus),
            format!("{:.2}", rec.deductions),
            format!("{:.2}", rec.total_amount),
            rec.status.to_db_str().to_string(),
            rec.expected_date.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write daily payroll detail rows as CSV to the given file.
pub fn write_details_csv(path: &str, details: &[DailyPayrollDetail]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "worker_id",
        "date",
        "start",
        "finish",
        "worked_hours",
        "break_hours",
        "base_salary",
        "week_start",
        "week_end",
    ])?;

    for d in details {
        wtr.write_record(&[
            d.worker_id.clone(),
            d.date.to_string(),
            d.start.map(|t| t.format("%H:%M").to_string()).unwrap_or_default(),
            d.finish.map(|t| t.format("%H:%M").to_string()).unwrap_or_default(),
            format!("{:.2}", d.worked_hours),
            format!("{:.2}", d.break_hours),
            format!("{:.2}", d.base_salary),
            d.week_start.to_string(),
            d.week_end.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write leave balances as CSV to the given file.
pub fn write_balances_csv(path: &str, balances: &[LeaveBalance]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["worker_id", "category", "accrued_hours", "last_accrued_week"])?;

    for b in balances {
        wtr.write_record(&[
            b.worker_id.clone(),
            b.category.to_db_str().to_string(),
            format!("{:.4}", b.accrued_hours),
            b.last_accrued_week.map(|d| d.to_string()).unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write weekly hour totals as CSV to the given file.
pub fn write_weeks_csv(path: &str, weeks: &[WeeklyHours]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["worker_id", "week_start", "week_end", "total_hours"])?;

    for w in weeks {
        wtr.write_record(&[
            w.worker_id.clone(),
            w.week_start.to_string(),
            w.week_end.to_string(),
            format!("{:.2}", w.total_hours),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
