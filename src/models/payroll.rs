use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum PayrollStatus {
    Pending,
    Paid,
}

impl PayrollStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PayrollStatus::Pending => "pending",
            PayrollStatus::Paid => "paid",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(PayrollStatus::Pending),
            "paid" => Some(PayrollStatus::Paid),
            _ => None,
        }
    }
}

/// One payroll row per (worker, week). Always recomputed on each run;
/// bonus and deductions are stored beside the total, not folded into it.
#[derive(Debug, Clone, Serialize)]
pub struct PayrollRecord {
    pub worker_id: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub bonus: f64,
    pub deductions: f64,
    pub total_amount: f64,
    pub status: PayrollStatus,
    pub expected_date: NaiveDate,
}

/// Per-day child row of a week's payroll record.
#[derive(Debug, Clone, Serialize)]
pub struct DailyPayrollDetail {
    pub worker_id: String,
    pub date: NaiveDate,
    pub start: Option<NaiveTime>,
    pub finish: Option<NaiveTime>,
    pub worked_hours: f64,
    pub break_hours: f64,
    pub base_salary: f64,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
}
