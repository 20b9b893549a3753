//! Unified application error type.
//! All modules (db, core, cli, export) return AppError so error handling
//! stays consistent across the engine and the CLI surface.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid punch kind: {0}")]
    InvalidPunchKind(String),

    #[error("Invalid leave category: {0}")]
    InvalidCategory(String),

    // ---------------------------
    // Engine errors
    // ---------------------------
    #[error("Invalid worker record: {0}")]
    InvalidWorker(String),

    #[error("No contract found for worker {0}")]
    NoContract(String),

    #[error("Retries exhausted for worker {worker} week {week}: {cause}")]
    RetriesExhausted {
        worker: String,
        week: String,
        cause: String,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
