//! Summary Output
//!
//! File I/O for handing a [`GameSummary`] to the persistence layer. The
//! core only fixes the field set and JSON shape; where the file lands is
//! the caller's business.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use pbp_events::GameSummary;
use thiserror::Error;

/// Errors that can occur writing summary output.
#[derive(Debug, Error)]
pub enum OutputError {
    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes a summary to a pretty-printed JSON file.
///
/// Parent directories are created as needed.
pub fn write_summary(path: &Path, summary: &GameSummary) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, summary)?;
    Ok(())
}

/// Reads a summary back from a JSON file.
pub fn read_summary(path: &Path) -> Result<GameSummary, OutputError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
