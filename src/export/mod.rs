mod csv;
mod json;

pub use csv::{write_balances_csv, write_details_csv, write_payroll_csv, write_weeks_csv};
pub use json::write_json;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for export commands.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Which persisted output table to export.
#[derive(Clone, Debug, ValueEnum)]
pub enum ExportTable {
    Payroll,
    Daily,
    Balances,
    Weeks,
}
