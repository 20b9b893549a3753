use crate::export::{ExportFormat, ExportTable};
use clap::{Parser, Subcommand};

/// Command-line interface definition for shifttally
/// Attendance aggregation CLI: punch events in, weekly hours / leave
/// accrual / payroll rows out, backed by SQLite
#[derive(Parser)]
#[command(
    name = "shifttally",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance aggregation engine: punch events to weekly hours, leave accrual and payroll over SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal run-log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Register or list worker contracts
    Worker {
        /// Worker id to register or update
        id: Option<String>,

        #[arg(long = "hours", help = "Contractual required weekly hours")]
        hours: Option<f64>,

        #[arg(long = "start", help = "Employment start date (YYYY-MM-DD)")]
        start: Option<String>,

        #[arg(long = "list", help = "List all registered workers")]
        list: bool,
    },

    /// Record a punch event for a worker
    Punch {
        /// Worker id
        worker: String,

        /// Date of the punch (YYYY-MM-DD)
        date: String,

        /// Punch kind: in, out, break-start, break-end
        kind: String,

        /// Time of the punch (HH:MM)
        time: String,
    },

    /// Run the aggregation engine (all workers, or one with --worker)
    Run {
        #[arg(long = "worker", help = "Run only for this worker id")]
        worker: Option<String>,

        #[arg(
            long = "now",
            help = "Reference date for week bucketing (YYYY-MM-DD, default: today)"
        )]
        now: Option<String>,
    },

    /// Show accrued leave balances for a worker
    Balance {
        /// Worker id
        worker: String,

        #[arg(
            long = "preview-week",
            value_name = "HOURS",
            help = "Preview the accrual for a week with the given effective hours, pro-rated against the worker's own contractual hours"
        )]
        preview_week: Option<f64>,
    },

    /// Show payroll records for a worker
    Payroll {
        /// Worker id
        worker: String,

        #[arg(
            long = "week",
            help = "Show the daily breakdown for the week starting on this Monday (YYYY-MM-DD)"
        )]
        week: Option<String>,
    },

    /// Show computed weekly working hours for a worker
    Weeks {
        /// Worker id
        worker: String,
    },

    /// Export persisted engine outputs
    Export {
        #[arg(long, value_enum, help = "Which table to export")]
        table: ExportTable,

        #[arg(long, help = "Worker id to export rows for")]
        worker: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long = "week",
            help = "Week start date for the daily table (YYYY-MM-DD)"
        )]
        week: Option<String>,
    },

    /// Run the weekly scheduler loop (fires per config weekday/time)
    Schedule {
        #[arg(long = "once", help = "Fire a single run immediately and exit")]
        once: bool,
    },
}
