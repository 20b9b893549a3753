use crate::models::balance::LeaveCategory;

/// Per-category accrual rates, each expressed as hours earned per
/// standard full-time week.
#[derive(Debug, Clone, Copy)]
pub struct AccrualRates {
    pub annual_per_week: f64,
    pub personal_per_week: f64,
}

/// What one processed week adds to the running balances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekAccrual {
    pub annual_hours: f64,
    pub personal_hours: f64,
}

impl WeekAccrual {
    pub fn hours_for(&self, category: LeaveCategory) -> f64 {
        match category {
            LeaveCategory::Annual => self.annual_hours,
            LeaveCategory::Personal => self.personal_hours,
        }
    }
}

/// Linear pro-rating against an explicitly supplied standard week.
///
/// The caller decides the denominator: the batch run passes the
/// organisation-wide standard (e.g. 38 h), the per-worker preview path
/// passes the worker's own contractual hours. Neither is hard-coded here.
pub fn accrue_week(
    effective_hours: f64,
    standard_week_hours: f64,
    rates: &AccrualRates,
) -> WeekAccrual {
    if standard_week_hours <= 0.0 || effective_hours <= 0.0 {
        return WeekAccrual {
            annual_hours: 0.0,
            personal_hours: 0.0,
        };
    }

    let ratio = effective_hours / standard_week_hours;

    WeekAccrual {
        annual_hours: ratio * rates.annual_per_week,
        personal_hours: ratio * rates.personal_per_week,
    }
}

/// Fractional hours → whole minutes, rounding to the nearest minute.
pub fn hours_to_minutes(hours: f64) -> i64 {
    (hours * 60.0).round() as i64
}

/// Pure presentation-time conversion of an accrued-hours figure into a
/// "Xd HHh MMm" string, given how many hours make up one leave day.
/// Never stored; balances stay in fractional hours.
pub fn format_leave(hours: f64, hours_per_day: f64) -> String {
    let total_minutes = hours_to_minutes(hours.max(0.0));
    let day_minutes = hours_to_minutes(hours_per_day.max(0.0));

    if day_minutes == 0 {
        let h = total_minutes / 60;
        let m = total_minutes % 60;
        return format!("{:02}h {:02}m", h, m);
    }

    let days = total_minutes / day_minutes;
    let rest = total_minutes % day_minutes;

    format!("{}d {:02}h {:02}m", days, rest / 60, rest % 60)
}
