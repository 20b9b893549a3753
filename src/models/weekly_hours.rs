use chrono::NaiveDate;
use serde::Serialize;

/// Persisted weekly total, unique per (worker_id, week_start).
/// Upsert semantics: a recomputation overwrites the previous value.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyHours {
    pub worker_id: String,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub total_hours: f64,
}
