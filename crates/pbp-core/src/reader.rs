//! Game Log I/O
//!
//! JSONL plumbing for raw game logs: one [`RawEvent`] per line, blank
//! lines skipped. Reading is the ingestion boundary of the pipeline; the
//! writer exists for tooling and tests.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use pbp_events::RawEvent;
use thiserror::Error;

/// Errors from reading a raw game log.
#[derive(Debug, Error)]
pub enum ReadError {
    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A line that is not a valid raw event record
    #[error("malformed record on line {line}: {source}")]
    Malformed {
        line: usize,
        source: serde_json::Error,
    },
}

/// Reads a raw game log from a JSONL file.
pub fn read_raw_log(path: impl AsRef<Path>) -> Result<Vec<RawEvent>, ReadError> {
    let file = File::open(path)?;
    read_raw_log_from(BufReader::new(file))
}

/// Reads a raw game log from any buffered reader.
///
/// Line numbers in errors are 1-based and count blank lines, so they
/// point at the offending line of the source file.
pub fn read_raw_log_from(reader: impl BufRead) -> Result<Vec<RawEvent>, ReadError> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = RawEvent::from_jsonl(&line).map_err(|source| ReadError::Malformed {
            line: idx + 1,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Writes a raw game log as JSONL, one record per line.
pub fn write_raw_log(path: impl AsRef<Path>, records: &[RawEvent]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for record in records {
        let json = record.to_jsonl()?;
        writeln!(writer, "{}", json)?;
    }
    writer.flush()?;
    Ok(())
}
