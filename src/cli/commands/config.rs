use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("{}", content);
            } else {
                warning(format!("No config file at {:?}; using defaults", path));
                let yaml = serde_yaml::to_string(cfg)
                    .map_err(|e| crate::errors::AppError::Config(e.to_string()))?;
                println!("{}", yaml);
            }
        }

        if *check {
            // Reparse the file through serde; missing fields are filled
            // by defaults, a broken file falls back entirely.
            let loaded = Config::load();
            info(format!("database: {}", loaded.database));
            info(format!("standard_week_hours: {}", loaded.standard_week_hours));
            info(format!(
                "rates: annual={}/week personal={}/week",
                loaded.annual_leave_rate, loaded.personal_leave_rate
            ));
            info(format!(
                "payroll: bonus={} deduction={} payout_offset_days={}",
                loaded.bonus_amount, loaded.deduction_amount, loaded.payout_offset_days
            ));
            info(format!(
                "schedule: {} {}",
                loaded.schedule_weekday, loaded.schedule_time
            ));
            success("Configuration OK");
        }
    }
    Ok(())
}
