use crate::errors::{AppError, AppResult};
use crate::models::IssueLogs;
use crate::utils::date::parse_date;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// `true` when `s` is a real calendar date written as `YYYY-MM-DD`.
pub fn is_iso_date(s: &str) -> bool {
    ISO_DATE.is_match(s) && parse_date(s).is_some()
}

/// Pre-flight gate run before any network call: every date header across all
/// issues must be a `YYYY-MM-DD` date. Fails on the first offending label.
pub fn check_issue_log_dates(issue_logs: &IssueLogs) -> AppResult<()> {
    let all_dates: BTreeSet<&str> = issue_logs
        .values()
        .flat_map(|logs| logs.keys().map(String::as_str))
        .collect();

    match all_dates.into_iter().find(|d| !is_iso_date(d)) {
        Some(bad) => Err(AppError::Validation(bad.to_string())),
        None => Ok(()),
    }
}
