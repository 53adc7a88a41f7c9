//! Make the tracker's worklogs match the local timesheet.
//!
//! Each (issue, date) is matched against the user's existing worklogs by the
//! exact instant `date 12:00:00 UTC`. No match creates a worklog, a match with
//! different seconds updates it, a match with equal seconds is left alone.
//! Only create and update are ever issued.

use crate::errors::{AppError, AppResult};
use crate::jira::WorklogApi;
use crate::models::{IssueLogs, RemoteWorklog, TimeLogs, WorklogPayload, worklog::midday_utc};
use crate::utils::date::parse_date;
use reqwest::StatusCode;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Updated,
    Unchanged,
    /// The tracker answered a create or update with this status.
    Failed(u16),
    /// The create or update never got an answer (connection, TLS, timeout).
    Unsent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DateResult {
    pub issue: String,
    pub date: String,
    pub outcome: Outcome,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReconcileReport {
    pub results: Vec<DateResult>,
}

impl ReconcileReport {
    pub fn count(&self, wanted: fn(&Outcome) -> bool) -> usize {
        self.results.iter().filter(|r| wanted(&r.outcome)).count()
    }

    pub fn created(&self) -> usize {
        self.count(|o| *o == Outcome::Created)
    }

    pub fn updated(&self) -> usize {
        self.count(|o| *o == Outcome::Updated)
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| *o == Outcome::Unchanged)
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_) | Outcome::Unsent))
    }

    pub fn outcome(&self, issue: &str, date: &str) -> Option<Outcome> {
        self.results
            .iter()
            .find(|r| r.issue == issue && r.date == date)
            .map(|r| r.outcome)
    }
}

/// Seconds sent to the tracker for `hours`.
pub fn seconds_for(hours: f64) -> i64 {
    (hours * 3600.0).round() as i64
}

fn is_write_success(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::CREATED
}

/// Reconcile every issue of `issue_logs` for the user `email`.
///
/// Rejected or unsent writes are logged and recorded as [`Outcome::Failed`]
/// or [`Outcome::Unsent`]; they never stop the run. Listing failures and
/// malformed remote timestamps do.
pub fn reconcile<A: WorklogApi>(
    api: &A,
    email: &str,
    issue_logs: &IssueLogs,
) -> AppResult<ReconcileReport> {
    let mut report = ReconcileReport::default();
    for (issue, time_logs) in issue_logs {
        submit_worklogs(api, email, issue, time_logs, &mut report)?;
    }
    Ok(report)
}

/// Reconcile the dates of a single issue, appending one result per date.
pub fn submit_worklogs<A: WorklogApi>(
    api: &A,
    email: &str,
    issue: &str,
    time_logs: &TimeLogs,
    report: &mut ReconcileReport,
) -> AppResult<()> {
    let existing = api.list_worklogs_for_user(issue, email)?;

    for (date_string, hours) in time_logs {
        let outcome = submit_one(api, issue, date_string, *hours, &existing)?;
        report.results.push(DateResult {
            issue: issue.to_string(),
            date: date_string.clone(),
            outcome,
        });
    }
    Ok(())
}

fn submit_one<A: WorklogApi>(
    api: &A,
    issue: &str,
    date_string: &str,
    hours: f64,
    existing: &[RemoteWorklog],
) -> AppResult<Outcome> {
    let date = parse_date(date_string).ok_or_else(|| AppError::Validation(date_string.to_string()))?;
    let log_date = midday_utc(date);
    let time_in_seconds = seconds_for(hours);
    let payload = WorklogPayload::new(date, time_in_seconds);

    let (sent, success) = match existing.iter().find(|w| w.started == log_date) {
        Some(worklog) if worklog.time_in_seconds == time_in_seconds => {
            info!(issue, date = date_string, outcome = "unchanged", "No change to existing worklog");
            return Ok(Outcome::Unchanged);
        }
        Some(worklog) => (
            api.update_worklog(issue, &worklog.id, &payload),
            Outcome::Updated,
        ),
        None => (api.create_worklog(issue, &payload), Outcome::Created),
    };

    let status = match sent {
        Ok(status) => status,
        Err(e) => {
            error!(
                issue,
                date = date_string,
                error = %e,
                outcome = "unsent",
                "Error logging time"
            );
            return Ok(Outcome::Unsent);
        }
    };

    if !is_write_success(status) {
        error!(
            issue,
            date = date_string,
            status = status.as_u16(),
            outcome = "failed",
            "Error logging time"
        );
        return Ok(Outcome::Failed(status.as_u16()));
    }

    match success {
        Outcome::Updated => info!(
            issue,
            date = date_string,
            outcome = "updated",
            "Existing worklog found and updated"
        ),
        _ => info!(issue, date = date_string, outcome = "created", "New worklog created"),
    }
    Ok(success)
}
