use super::punch_kind::PunchKind;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One timestamped attendance action for a worker.
/// Append-only: the engine reads punches, it never rewrites them.
#[derive(Debug, Clone, Serialize)]
pub struct PunchEvent {
    pub id: i64,
    pub worker_id: String,  // → punches.worker_id
    pub date: NaiveDate,    // → punches.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,    // → punches.time (TEXT "HH:MM")
    pub kind: PunchKind,    // → punches.kind
    pub source: String,     // → punches.source (TEXT, default 'cli')
    pub created_at: String, // → punches.created_at (TEXT, ISO8601)
}

impl PunchEvent {
    /// High-level constructor for punches recorded through the CLI.
    pub fn new(
        id: i64,
        worker_id: &str,
        date: NaiveDate,
        time: NaiveTime,
        kind: PunchKind,
    ) -> Self {
        Self {
            id,
            worker_id: worker_id.to_string(),
            date,
            time,
            kind,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}
