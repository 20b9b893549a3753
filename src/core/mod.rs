pub mod accrual;
pub mod aggregator;
pub mod bucketer;
pub mod engine;
pub mod payroll;
pub mod reducer;
pub mod run;
pub mod store;
