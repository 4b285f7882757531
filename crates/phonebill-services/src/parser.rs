//! Call log parser
//!
//! Turns raw log text into call records, one per line:
//!
//! ```text
//! 420774577453,13-01-2020 18:10:15,13-01-2020 18:12:57
//! ```

use chrono::NaiveDateTime;
use phonebill_core::{
    models::{CallRecord, TIMESTAMP_FORMAT},
    AppError, AppResult,
};
use tracing::{debug, instrument, warn};

/// Field separator within a log line
const FIELD_SEPARATOR: char = ',';

/// Fields expected on every log line
const FIELD_COUNT: usize = 3;

/// Parse a whole call log
///
/// Trailing empty lines are ignored and an empty or whitespace-only log
/// yields no records. Any malformed line aborts the parse.
#[instrument(skip(phone_log), fields(bytes = phone_log.len()))]
pub fn parse_call_log(phone_log: &str) -> AppResult<Vec<CallRecord>> {
    if phone_log.trim().is_empty() {
        debug!("Empty call log");
        return Ok(Vec::new());
    }

    let mut lines: Vec<&str> = phone_log
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let records = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| parse_line(idx + 1, line))
        .collect::<AppResult<Vec<_>>>()?;

    debug!("Parsed {} call records", records.len());
    Ok(records)
}

/// Parse a single log line (`line_number` is 1-based)
pub fn parse_line(line_number: usize, line: &str) -> AppResult<CallRecord> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        warn!(
            "Rejecting line {}: {} fields instead of {}",
            line_number,
            fields.len(),
            FIELD_COUNT
        );
        return Err(AppError::MalformedLine {
            line: line_number,
            fields: fields.len(),
        });
    }

    let number = fields[0];
    let start = parse_timestamp(line_number, fields[1])?;
    let end = parse_timestamp(line_number, fields[2])?;

    if end < start {
        warn!("Rejecting line {}: call ends before it starts", line_number);
        return Err(AppError::InvalidInterval {
            line: line_number,
            start: fields[1].to_string(),
            end: fields[2].to_string(),
        });
    }

    Ok(CallRecord::new(number, start, end))
}

/// Parse a `dd-mm-yyyy HH:MM:SS` timestamp
pub fn parse_timestamp(line_number: usize, text: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|e| {
        warn!("Invalid timestamp '{}' on line {}: {}", text, line_number, e);
        AppError::TimestampFormat {
            line: line_number,
            value: text.to_string(),
        }
    })
}
