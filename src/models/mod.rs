pub mod balance;
pub mod contract;
pub mod payroll;
pub mod punch;
pub mod punch_kind;
pub mod session;
pub mod week;
pub mod weekly_hours;
