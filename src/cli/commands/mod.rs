pub mod balance;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod payroll;
pub mod punch;
pub mod run;
pub mod schedule;
pub mod weeks;
pub mod worker;
