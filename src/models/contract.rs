use chrono::NaiveDate;
use serde::Serialize;

/// The active employment contract for one worker.
/// Read-only input to the engine; owned by HR onboarding, not by us.
#[derive(Debug, Clone, Serialize)]
pub struct Contract {
    pub worker_id: String,              // → workers.worker_id
    pub required_weekly_hours: f64,     // → workers.required_weekly_hours
    pub employment_start: NaiveDate,    // → workers.employment_start
}

impl Contract {
    /// A contract is usable when it carries a worker id and a positive
    /// weekly requirement. Anything else gets the worker skipped by the
    /// engine (reported, not fatal).
    pub fn is_valid(&self) -> bool {
        !self.worker_id.trim().is_empty() && self.required_weekly_hours > 0.0
    }
}
