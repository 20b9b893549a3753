use crate::models::session::DailySession;

/// Weekly totals computed from the seven daily sessions of one window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekTotals {
    /// Sum of worked minutes converted to hours, rounded to 2 decimals.
    pub total_hours: f64,
    /// Total capped at the contractual requirement; this is what accrual
    /// is computed from. Overtime never increases accrual.
    pub effective_hours: f64,
}

pub fn aggregate_week(sessions: &[DailySession], required_weekly_hours: f64) -> WeekTotals {
    let worked_minutes: i64 = sessions.iter().map(|s| s.worked_minutes).sum();
    let total_hours = round2(worked_minutes as f64 / 60.0);

    WeekTotals {
        total_hours,
        effective_hours: total_hours.min(required_weekly_hours),
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
