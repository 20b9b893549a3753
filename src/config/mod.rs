use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,

    /// Organisation-wide standard full-time week, the accrual
    /// denominator in the batch run.
    #[serde(default = "default_standard_week_hours")]
    pub standard_week_hours: f64,

    /// Hours of annual leave earned per standard full-time week.
    #[serde(default = "default_annual_rate")]
    pub annual_leave_rate: f64,

    /// Hours of personal leave earned per standard full-time week.
    #[serde(default = "default_personal_rate")]
    pub personal_leave_rate: f64,

    /// Hours that make up one leave day in display conversions.
    #[serde(default = "default_leave_day_hours")]
    pub leave_day_hours: f64,

    #[serde(default = "default_bonus_amount")]
    pub bonus_amount: f64,

    #[serde(default = "default_deduction_amount")]
    pub deduction_amount: f64,

    #[serde(default = "default_payout_offset_days")]
    pub payout_offset_days: u64,

    /// Weekday the scheduler fires on ("Mon".."Sun").
    #[serde(default = "default_schedule_weekday")]
    pub schedule_weekday: String,

    /// Time of day the scheduler fires at ("HH:MM").
    #[serde(default = "default_schedule_time")]
    pub schedule_time: String,

    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,

    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

fn default_standard_week_hours() -> f64 {
    38.0
}
fn default_annual_rate() -> f64 {
    2.923
}
fn default_personal_rate() -> f64 {
    1.462
}
fn default_leave_day_hours() -> f64 {
    7.6
}
fn default_bonus_amount() -> f64 {
    50.0
}
fn default_deduction_amount() -> f64 {
    50.0
}
fn default_payout_offset_days() -> u64 {
    7
}
fn default_schedule_weekday() -> String {
    "Mon".to_string()
}
fn default_schedule_time() -> String {
    "02:00".to_string()
}
fn default_retry_attempts() -> u32 {
    3
}
fn default_retry_backoff_ms() -> u64 {
    200
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            standard_week_hours: default_standard_week_hours(),
            annual_leave_rate: default_annual_rate(),
            personal_leave_rate: default_personal_rate(),
            leave_day_hours: default_leave_day_hours(),
            bonus_amount: default_bonus_amount(),
            deduction_amount: default_deduction_amount(),
            payout_offset_days: default_payout_offset_days(),
            schedule_weekday: default_schedule_weekday(),
            schedule_time: default_schedule_time(),
            retry_attempts: default_retry_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shifttally")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shifttally")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shifttally.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("shifttally.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("Database:    {:?}", db_path);

        Ok(())
    }
}
