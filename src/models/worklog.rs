//! Worklog models exchanged with the tracker's `/issue/{key}/worklog` endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// Timestamp layout used by the tracker for `started` (e.g. `2024-01-01T12:00:00.000+0000`).
pub const STARTED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Body of `GET issue/{key}/worklog`. Only the first page is ever read.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorklogPage {
    pub worklogs: Vec<WorklogRaw>,
    pub total: Option<u64>,
    pub max_results: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorklogAuthor {
    pub email_address: Option<String>,
}

/// A worklog exactly as returned by the tracker.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorklogRaw {
    pub id: Value,
    pub started: String,
    pub time_spent_seconds: i64,
    pub author: Option<WorklogAuthor>,
}

impl WorklogRaw {
    /// The tracker sends ids as strings, older instances as numbers.
    pub fn id_string(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    pub fn author_email(&self) -> Option<&str> {
        self.author.as_ref()?.email_address.as_deref()
    }

    /// Project the raw record into the reconciler's working shape.
    pub fn to_remote(&self) -> AppResult<RemoteWorklog> {
        let started = DateTime::parse_from_str(&self.started, STARTED_FORMAT)
            .map_err(|e| {
                AppError::Format(format!(
                    "worklog {} has an unparsable started timestamp '{}': {}",
                    self.id_string(),
                    self.started,
                    e
                ))
            })?
            .with_timezone(&Utc);

        Ok(RemoteWorklog {
            id: self.id_string(),
            started,
            time_in_seconds: self.time_spent_seconds,
            author_email: self.author_email().map(str::to_string),
        })
    }
}

/// A remote worklog owned by the configured user.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteWorklog {
    pub id: String,
    pub started: DateTime<Utc>,
    pub time_in_seconds: i64,
    pub author_email: Option<String>,
}

/// Body sent on create and update.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorklogPayload {
    pub time_spent_seconds: i64,
    pub started: String,
}

impl WorklogPayload {
    /// Build a payload anchored at 12:00:00 UTC on `date`.
    pub fn new(date: NaiveDate, time_spent_seconds: i64) -> Self {
        Self {
            time_spent_seconds,
            started: midday_utc(date)
                .format("%Y-%m-%dT%H:%M:%S%.3f%z")
                .to_string(),
        }
    }
}

/// Midday UTC of `date`, the instant every worklog written by this tool starts at.
pub fn midday_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(12, 0, 0)
        .unwrap_or_default()
        .and_utc()
}
