use crate::core::aggregator::round2;
use crate::models::payroll::{DailyPayrollDetail, PayrollRecord, PayrollStatus};
use crate::models::session::DailySession;
use crate::models::week::WeekWindow;
use chrono::{Days, NaiveDate};

/// Fixed amounts applied when a week lands over or under the contract.
#[derive(Debug, Clone, Copy)]
pub struct PayRules {
    pub bonus_amount: f64,
    pub deduction_amount: f64,
    pub payout_offset_days: u64,
}

/// Derive the payroll line for one day.
///
/// `base_salary = worked_hours - break_hours` is the day-rate proxy the
/// upstream system uses in its batch path; it is intentionally NOT a real
/// wage calculation (the worker's salary never enters it) and is kept
/// as-is rather than unified with any salaried computation.
pub fn daily_detail(session: &DailySession, window: &WeekWindow) -> DailyPayrollDetail {
    let worked = round2(session.worked_hours());
    let breaks = round2(session.break_hours());

    DailyPayrollDetail {
        worker_id: session.worker_id.clone(),
        date: session.date,
        start: session.first_check_in,
        finish: session.last_check_out,
        worked_hours: worked,
        break_hours: breaks,
        base_salary: round2(worked - breaks),
        week_start: window.start,
        week_end: window.end,
    }
}

/// Compose the weekly payroll record plus its seven daily rows.
///
/// The bonus/deduction comparison uses the uncapped weekly worked hours
/// against the contractual requirement; it is independent of the accrual
/// capping. Status always starts out pending, payout expected a fixed
/// number of days after the computation date.
pub fn compose_week(
    worker_id: &str,
    window: &WeekWindow,
    sessions: &[DailySession],
    required_weekly_hours: f64,
    rules: &PayRules,
    computed_on: NaiveDate,
) -> (PayrollRecord, Vec<DailyPayrollDetail>) {
    let details: Vec<DailyPayrollDetail> =
        sessions.iter().map(|s| daily_detail(s, window)).collect();

    let total_amount = round2(details.iter().map(|d| d.base_salary).sum::<f64>());

    let worked_minutes: i64 = sessions.iter().map(|s| s.worked_minutes).sum();
    let worked_hours = round2(worked_minutes as f64 / 60.0);

    let (bonus, deductions) = if worked_hours > required_weekly_hours {
        (rules.bonus_amount, 0.0)
    } else if worked_hours < required_weekly_hours {
        (0.0, rules.deduction_amount)
    } else {
        (0.0, 0.0)
    };

    let record = PayrollRecord {
        worker_id: worker_id.to_string(),
        period_start: window.start,
        period_end: window.end,
        bonus,
        deductions,
        total_amount,
        status: PayrollStatus::Pending,
        expected_date: computed_on + Days::new(rules.payout_offset_days),
    };

    (record, details)
}
