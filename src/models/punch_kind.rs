use serde::Serialize;

/// The four attendance actions a time clock can emit.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum PunchKind {
    CheckIn,
    CheckOut,
    BreakStart,
    BreakEnd,
}

impl PunchKind {
    /// Parse a user-supplied kind (CLI input, case-insensitive).
    pub fn pk_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in" | "check-in" | "checkin" => Some(Self::CheckIn),
            "out" | "check-out" | "checkout" => Some(Self::CheckOut),
            "break-start" | "breakstart" => Some(Self::BreakStart),
            "break-end" | "breakend" => Some(Self::BreakEnd),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchKind::CheckIn => "check_in",
            PunchKind::CheckOut => "check_out",
            PunchKind::BreakStart => "break_start",
            PunchKind::BreakEnd => "break_end",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "check_in" => Some(PunchKind::CheckIn),
            "check_out" => Some(PunchKind::CheckOut),
            "break_start" => Some(PunchKind::BreakStart),
            "break_end" => Some(PunchKind::BreakEnd),
            _ => None,
        }
    }

    pub fn is_check_in(&self) -> bool {
        matches!(self, PunchKind::CheckIn)
    }

    pub fn is_check_out(&self) -> bool {
        matches!(self, PunchKind::CheckOut)
    }
}
