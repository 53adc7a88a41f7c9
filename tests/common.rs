#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn csv2worklogs() -> Command {
    cargo_bin_cmd!("csv2worklogs")
}

pub fn make_timesheet() -> Command {
    cargo_bin_cmd!("make-timesheet")
}

/// `csv2worklogs` with a clean environment: no JIRA_* variables and a HOME
/// without a config file.
pub fn csv2worklogs_isolated(home: &Path) -> Command {
    let mut cmd = csv2worklogs();
    cmd.env_remove("JIRA_EMAIL")
        .env_remove("JIRA_API_TOKEN")
        .env_remove("JIRA_BASE_URL")
        .env("HOME", home);
    cmd
}

/// Write `content` to `name` inside `dir` and return its path.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write test file");
    path
}

pub const SAMPLE_SHEET: &str = "\
Issue,Notes,2024-01-01,2024-01-02,2024-01-03
ABC-1,standup,4,,1.5
,,,,
ABC-2,,,8,
";

/// A worklog as the tracker returns it.
pub fn worklog_json(id: &str, started: &str, seconds: i64, email: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "started": started,
        "timeSpentSeconds": seconds,
        "author": { "accountId": "acc-1", "emailAddress": email, "displayName": "Someone" }
    })
}

pub fn worklog_page(worklogs: Vec<serde_json::Value>) -> String {
    let total = worklogs.len();
    serde_json::json!({
        "startAt": 0,
        "maxResults": 5000,
        "total": total,
        "worklogs": worklogs
    })
    .to_string()
}
