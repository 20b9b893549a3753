//! SQLite connection wrapper (lightweight for CLI/engine usage).

use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        // A bounded wait instead of an immediate SQLITE_BUSY when two
        // runs for the same database overlap.
        conn.busy_timeout(Duration::from_millis(5_000))?;
        Ok(Self { conn })
    }
}
