use crate::config::Credentials;
use crate::errors::{AppError, AppResult};
use crate::jira::WorklogApi;
use crate::models::{RemoteWorklog, WorklogPage, WorklogPayload};
use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

pub const API_ROOT: &str = "/rest/api/3/";
const DEFAULT_USER_AGENT: &str = concat!("timesheet-worklogs/", env!("CARGO_PKG_VERSION"));

/// Blocking client for `{base}/rest/api/3/issue/{key}/worklog`.
///
/// Only the first page of a worklog listing is read; issues with more
/// worklogs than the tracker returns per page are not fully visible.
pub struct JiraClient {
    http: HttpClient,
    api_root: Url,
    email: String,
    api_token: String,
}

impl JiraClient {
    pub fn new(credentials: &Credentials) -> AppResult<Self> {
        let base = Url::parse(&credentials.base_url).map_err(|e| {
            AppError::Config(format!("invalid base URL '{}': {}", credentials.base_url, e))
        })?;
        let api_root = base
            .join(API_ROOT)
            .map_err(|e| AppError::Config(format!("invalid base URL '{}': {}", base, e)))?;

        Ok(Self {
            http: build_http_client()?,
            api_root,
            email: credentials.email.clone(),
            api_token: credentials.api_token.clone(),
        })
    }

    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    /// `issue/{key}/worklog[/{id}]` under the API root, key and id percent-encoded.
    pub fn worklog_url(&self, issue: &str, worklog_id: Option<&str>) -> AppResult<Url> {
        let mut url = self.api_root.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                AppError::Config(format!("base URL {} cannot carry a path", self.api_root))
            })?;
            segments.pop_if_empty().extend(["issue", issue, "worklog"]);
            if let Some(id) = worklog_id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "tracker request");
        self.http
            .request(method, url)
            .basic_auth(&self.email, Some(&self.api_token))
    }

    fn parse_json(issue: &str, response: Response) -> AppResult<Value> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<Value>()?)
        } else {
            Err(AppError::Remote {
                issue: issue.to_string(),
                status: status.as_u16(),
            })
        }
    }

    /// Raw body of `GET issue/{key}/worklog`.
    pub fn list_worklogs(&self, issue: &str) -> AppResult<Value> {
        let url = self.worklog_url(issue, None)?;
        let response = self.request(Method::GET, url).send()?;
        Self::parse_json(issue, response)
    }

    /// Raw body of `GET issue/{key}/worklog/{id}`.
    pub fn get_worklog(&self, issue: &str, worklog_id: &str) -> AppResult<Value> {
        let url = self.worklog_url(issue, Some(worklog_id))?;
        let response = self.request(Method::GET, url).send()?;
        Self::parse_json(issue, response)
    }

    fn send_payload(
        &self,
        method: Method,
        url: Url,
        payload: &WorklogPayload,
    ) -> AppResult<StatusCode> {
        let response = self.request(method, url).json(payload).send()?;
        Ok(response.status())
    }
}

impl WorklogApi for JiraClient {
    fn list_worklogs_for_user(&self, issue: &str, email: &str) -> AppResult<Vec<RemoteWorklog>> {
        let page: WorklogPage = serde_json::from_value(self.list_worklogs(issue)?)
            .map_err(|e| AppError::Format(format!("worklog list for {issue}: {e}")))?;

        if let Some(total) = page.total
            && total > page.worklogs.len() as u64
        {
            warn!(
                issue,
                total,
                returned = page.worklogs.len() as u64,
                max_results = page.max_results,
                "Only the first page of worklogs is visible"
            );
        }

        page.worklogs
            .iter()
            .filter(|w| w.author_email() == Some(email))
            .map(|w| w.to_remote())
            .collect()
    }

    fn create_worklog(&self, issue: &str, payload: &WorklogPayload) -> AppResult<StatusCode> {
        let url = self.worklog_url(issue, None)?;
        self.send_payload(Method::POST, url, payload)
    }

    fn update_worklog(
        &self,
        issue: &str,
        worklog_id: &str,
        payload: &WorklogPayload,
    ) -> AppResult<StatusCode> {
        let url = self.worklog_url(issue, Some(worklog_id))?;
        self.send_payload(Method::PUT, url, payload)
    }
}

fn build_http_client() -> AppResult<HttpClient> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

    Ok(HttpClient::builder().default_headers(headers).build()?)
}
