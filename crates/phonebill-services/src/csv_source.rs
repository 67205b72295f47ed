//! CSV call source
//!
//! Reads `(contact_id, start, end)` rows from a comma-separated table.
//! The first non-empty row is a header and is skipped.

use chrono::NaiveDateTime;
use phonebill_core::{
    models::{CallRecord, TIMESTAMP_FORMAT},
    traits::CallSource,
    AppError, AppResult,
};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, error, info, instrument};

/// Number of columns in a call table
const COLUMNS: usize = 3;

/// Call source backed by CSV text
#[derive(Debug)]
pub struct CsvCallSource<R> {
    reader: R,
    name: String,
}

impl CsvCallSource<BufReader<File>> {
    /// Open a CSV file
    ///
    /// # Errors
    ///
    /// Returns `AppError::MissingOrInvalidFile` if the file cannot be opened
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            error!("Cannot open {}: {}", path.display(), e);
            AppError::MissingOrInvalidFile(format!("{}: {}", path.display(), e))
        })?;

        Ok(Self::new(BufReader::new(file), path.display().to_string()))
    }
}

impl<R: BufRead> CsvCallSource<R> {
    /// Wrap any buffered reader; `name` is used in log messages
    pub fn new(reader: R, name: impl Into<String>) -> Self {
        Self {
            reader,
            name: name.into(),
        }
    }
}

impl<R: BufRead> CallSource for CsvCallSource<R> {
    #[instrument(skip(self), fields(source = %self.name))]
    fn read_records(&mut self) -> AppResult<Vec<CallRecord>> {
        let mut records = Vec::new();
        let mut header_seen = false;
        let mut line = String::new();
        let mut line_no = 0;

        loop {
            line.clear();
            let read = self.reader.read_line(&mut line).map_err(|e| {
                error!("Read failed after line {}: {}", line_no, e);
                AppError::MissingOrInvalidFile(format!("{}: {}", self.name, e))
            })?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let row = line.trim_end_matches(['\n', '\r']);
            if row.trim().is_empty() {
                continue;
            }

            if !header_seen {
                debug!("Skipping header: {}", row);
                header_seen = true;
                continue;
            }

            records.push(parse_row(line_no, row)?);
        }

        info!("Read {} call records", records.len());

        Ok(records)
    }
}

/// Parse one data row into a call record
pub fn parse_row(line: usize, row: &str) -> AppResult<CallRecord> {
    let fields = split_fields(row);
    if fields.len() != COLUMNS {
        return Err(AppError::MalformedRecord {
            line,
            reason: format!("expected {} columns, found {}", COLUMNS, fields.len()),
        });
    }

    let contact_id = fields[0]
        .parse::<u64>()
        .map_err(|_| AppError::MalformedRecord {
            line,
            reason: format!("'{}' is not a phone number", fields[0]),
        })?;

    Ok(CallRecord {
        contact_id,
        start: parse_timestamp(line, &fields[1])?,
        end: parse_timestamp(line, &fields[2])?,
        line,
    })
}

fn parse_timestamp(line: usize, value: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| {
        AppError::MalformedTimestamp {
            line,
            value: value.to_string(),
        }
    })
}

/// Split a row on commas, honoring double-quoted fields
fn split_fields(row: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = row.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}
