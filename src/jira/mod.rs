//! Client for the tracker's worklog sub-resource.

pub mod client;

pub use client::JiraClient;

use crate::errors::AppResult;
use crate::models::{RemoteWorklog, WorklogPayload};
use reqwest::StatusCode;

/// The worklog operations the reconciler needs.
///
/// Writes return the raw status code: the caller decides what counts as
/// success, and a rejected write is not an error at this level.
pub trait WorklogApi {
    fn list_worklogs_for_user(&self, issue: &str, email: &str) -> AppResult<Vec<RemoteWorklog>>;

    fn create_worklog(&self, issue: &str, payload: &WorklogPayload) -> AppResult<StatusCode>;

    fn update_worklog(
        &self,
        issue: &str,
        worklog_id: &str,
        payload: &WorklogPayload,
    ) -> AppResult<StatusCode>;
}
