use chrono::NaiveDate;
use serde::Serialize;

/// Leave categories the accrual calculator feeds.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum LeaveCategory {
    Annual,
    Personal,
}

impl LeaveCategory {
    pub const ALL: [LeaveCategory; 2] = [LeaveCategory::Annual, LeaveCategory::Personal];

    pub fn to_db_str(&self) -> &'static str {
        match self {
            LeaveCategory::Annual => "annual",
            LeaveCategory::Personal => "personal",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "annual" => Some(LeaveCategory::Annual),
            "personal" => Some(LeaveCategory::Personal),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveCategory::Annual => "Annual leave",
            LeaveCategory::Personal => "Personal leave",
        }
    }
}

/// Running accrued total for one (worker, category).
/// `last_accrued_week` doubles as the idempotency marker: a week whose
/// start date equals it has already been added and must not be re-added.
#[derive(Debug, Clone, Serialize)]
pub struct LeaveBalance {
    pub worker_id: String,
    pub category: LeaveCategory,
    pub accrued_hours: f64,
    pub last_accrued_week: Option<NaiveDate>,
}
