use crate::errors::{AppError, AppResult};
use crate::models::{IssueLogs, TimeLogs};
use crate::timesheet::{ISSUE_COLUMN, NOTES_COLUMN};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a timesheet file into an `IssueLogs` map.
///
/// - rows with an empty or missing `Issue` cell are skipped
/// - the `Notes` column is dropped
/// - every other column is a date column, keyed by its trimmed header
/// - empty cells mean "nothing logged" and produce no entry
/// - a later row for the same issue replaces the earlier one
pub fn read_csv<P: AsRef<Path>>(path: P) -> AppResult<IssueLogs> {
    let file = File::open(path.as_ref())?;
    read_issue_logs(file)
}

/// Same as [`read_csv`], from any reader.
pub fn read_issue_logs<R: Read>(input: R) -> AppResult<IssueLogs> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let issue_idx = headers
        .iter()
        .position(|h| h == ISSUE_COLUMN)
        .ok_or_else(|| AppError::Parse(format!("missing '{ISSUE_COLUMN}' column in header")))?;

    let mut issue_logs = IssueLogs::new();

    for record in rdr.records() {
        let record = record?;

        let issue = match record.get(issue_idx) {
            Some(cell) if !cell.trim().is_empty() => cell.trim().to_string(),
            _ => continue,
        };

        let logs = parse_row(&issue, &headers, issue_idx, &record)?;
        issue_logs.insert(issue, logs);
    }

    Ok(issue_logs)
}

fn parse_row(
    issue: &str,
    headers: &[String],
    issue_idx: usize,
    record: &StringRecord,
) -> AppResult<TimeLogs> {
    let mut logs = TimeLogs::new();

    for (idx, (header, cell)) in headers.iter().zip(record.iter()).enumerate() {
        if idx == issue_idx || header == NOTES_COLUMN {
            continue;
        }

        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }

        let hours = parse_hours(cell).ok_or_else(|| {
            AppError::Parse(format!(
                "invalid hours value '{cell}' for issue {issue}, column '{header}'"
            ))
        })?;

        logs.insert(header.clone(), hours);
    }

    Ok(logs)
}

fn parse_hours(cell: &str) -> Option<f64> {
    cell.parse::<f64>()
        .ok()
        .filter(|h| h.is_finite() && *h >= 0.0)
}
