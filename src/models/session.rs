use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// The reduced result of one worker's punches on one calendar date.
/// `worked_minutes` is already net of breaks and floored at zero.
#[derive(Debug, Clone, Serialize)]
pub struct DailySession {
    pub worker_id: String,
    pub date: NaiveDate,
    pub worked_minutes: i64,
    pub break_minutes: i64,
    pub first_check_in: Option<NaiveTime>,
    pub last_check_out: Option<NaiveTime>,
}

impl DailySession {
    pub fn empty(worker_id: &str, date: NaiveDate) -> Self {
        Self {
            worker_id: worker_id.to_string(),
            date,
            worked_minutes: 0,
            break_minutes: 0,
            first_check_in: None,
            last_check_out: None,
        }
    }

    pub fn worked_hours(&self) -> f64 {
        self.worked_minutes as f64 / 60.0
    }

    pub fn break_hours(&self) -> f64 {
        self.break_minutes as f64 / 60.0
    }
}
