use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;

/// Write any serializable row set as pretty JSON to the given file.
pub fn write_json<T: Serialize>(path: &str, rows: &[T]) -> AppResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, rows).map_err(|e| AppError::Export(e.to_string()))?;
    Ok(())
}
