mod common;
use chrono::{TimeZone, Utc};
use common::{worklog_json, worklog_page};
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use timesheet_worklogs::config::Credentials;
use timesheet_worklogs::errors::AppError;
use timesheet_worklogs::jira::{JiraClient, WorklogApi};
use timesheet_worklogs::models::WorklogPayload;

const ME: &str = "me@example.com";
const LIST_PATH: &str = "/rest/api/3/issue/ABC-1/worklog";

fn client_for(server: &Server) -> JiraClient {
    JiraClient::new(&Credentials {
        email: ME.to_string(),
        api_token: "secret-token".to_string(),
        base_url: server.url(),
    })
    .expect("build client")
}

fn payload() -> WorklogPayload {
    WorklogPayload::new(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 14400)
}

#[test]
fn test_api_root_replaces_base_path() {
    let client = JiraClient::new(&Credentials {
        email: ME.into(),
        api_token: "t".into(),
        base_url: "https://example.atlassian.net/some/path".into(),
    })
    .unwrap();

    assert_eq!(
        client.api_root().as_str(),
        "https://example.atlassian.net/rest/api/3/"
    );
}

#[test]
fn test_invalid_base_url_is_a_config_error() {
    let err = JiraClient::new(&Credentials {
        email: ME.into(),
        api_token: "t".into(),
        base_url: "not a url".into(),
    })
    .err()
    .expect("invalid url must fail");

    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_list_worklogs_for_user_filters_and_converts() {
    let mut server = Server::new();
    let body = worklog_page(vec![
        worklog_json("1", "2024-01-01T12:00:00.000+0000", 14400, ME),
        worklog_json("2", "2024-01-02T12:00:00.000+0000", 3600, "other@example.com"),
        worklog_json("3", "2024-01-03T14:00:00.000+0200", 1800, ME),
    ]);
    let mock = server
        .mock("GET", LIST_PATH)
        .match_header("authorization", Matcher::Regex("^Basic ".into()))
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create();

    let worklogs = client_for(&server).list_worklogs_for_user("ABC-1", ME).unwrap();

    mock.assert();
    assert_eq!(worklogs.len(), 2);
    assert_eq!(worklogs[0].id, "1");
    assert_eq!(
        worklogs[0].started,
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    );
    assert_eq!(worklogs[0].time_in_seconds, 14400);
    assert_eq!(worklogs[1].id, "3");
    assert_eq!(
        worklogs[1].started,
        Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap()
    );
}

#[test]
fn test_numeric_ids_and_hidden_emails() {
    let mut server = Server::new();
    let body = serde_json::json!({
        "worklogs": [
            { "id": 42, "started": "2024-01-01T12:00:00.000+0000", "timeSpentSeconds": 60,
              "author": { "emailAddress": ME } },
            { "id": "43", "started": "2024-01-01T12:00:00.000+0000", "timeSpentSeconds": 60,
              "author": { "displayName": "Private" } }
        ]
    })
    .to_string();
    server
        .mock("GET", LIST_PATH)
        .with_status(200)
        .with_body(body)
        .create();

    let worklogs = client_for(&server).list_worklogs_for_user("ABC-1", ME).unwrap();

    assert_eq!(worklogs.len(), 1);
    assert_eq!(worklogs[0].id, "42");
}

#[test]
fn test_malformed_started_is_a_format_error() {
    let mut server = Server::new();
    server
        .mock("GET", LIST_PATH)
        .with_status(200)
        .with_body(worklog_page(vec![worklog_json("1", "01/01/2024 12:00", 60, ME)]))
        .create();

    let err = client_for(&server)
        .list_worklogs_for_user("ABC-1", ME)
        .unwrap_err();

    assert!(matches!(err, AppError::Format(_)), "got {err:?}");
}

#[test]
fn test_list_failure_reports_issue_and_status() {
    let mut server = Server::new();
    server.mock("GET", LIST_PATH).with_status(404).create();

    let err = client_for(&server).list_worklogs("ABC-1").unwrap_err();

    match err {
        AppError::Remote { issue, status } => {
            assert_eq!(issue, "ABC-1");
            assert_eq!(status, 404);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_get_worklog_returns_raw_json() {
    let mut server = Server::new();
    server
        .mock("GET", "/rest/api/3/issue/ABC-1/worklog/100")
        .with_status(200)
        .with_body(worklog_json("100", "2024-01-01T12:00:00.000+0000", 60, ME).to_string())
        .create();

    let value = client_for(&server).get_worklog("ABC-1", "100").unwrap();

    assert_eq!(value["id"], "100");
    assert_eq!(value["timeSpentSeconds"], 60);
}

#[test]
fn test_create_posts_typed_payload() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", LIST_PATH)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "timeSpentSeconds": 14400,
            "started": "2024-01-01T12:00:00.000+0000"
        })))
        .with_status(201)
        .create();

    let status = client_for(&server).create_worklog("ABC-1", &payload()).unwrap();

    mock.assert();
    assert_eq!(status, StatusCode::CREATED);
}

#[test]
fn test_update_puts_to_worklog_resource_and_returns_status() {
    let mut server = Server::new();
    let mock = server
        .mock("PUT", "/rest/api/3/issue/ABC-1/worklog/100")
        .match_body(Matcher::PartialJson(serde_json::json!({ "timeSpentSeconds": 14400 })))
        .with_status(400)
        .with_body(r#"{"errorMessages":["nope"]}"#)
        .create();

    let status = client_for(&server)
        .update_worklog("ABC-1", "100", &payload())
        .unwrap();

    mock.assert();
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[test]
fn test_listing_without_worklogs_array_is_a_format_error() {
    let mut server = Server::new();
    server
        .mock("GET", LIST_PATH)
        .with_status(200)
        .with_body("{}")
        .create();

    let err = client_for(&server)
        .list_worklogs_for_user("ABC-1", ME)
        .unwrap_err();

    assert!(matches!(err, AppError::Format(_)), "got {err:?}");
}

#[test]
fn test_only_first_page_is_visible() {
    let mut server = Server::new();
    let body = serde_json::json!({
        "startAt": 0,
        "maxResults": 1,
        "total": 5,
        "worklogs": [worklog_json("1", "2024-01-01T12:00:00.000+0000", 3600, ME)]
    })
    .to_string();
    let mock = server
        .mock("GET", LIST_PATH)
        .with_status(200)
        .with_body(body)
        .expect(1)
        .create();

    let worklogs = client_for(&server).list_worklogs_for_user("ABC-1", ME).unwrap();

    mock.assert();
    assert_eq!(worklogs.len(), 1);
    assert_eq!(worklogs[0].id, "1");
}

#[test]
fn test_worklog_url_encodes_issue_and_id() {
    let client = JiraClient::new(&Credentials {
        email: ME.into(),
        api_token: "t".into(),
        base_url: "https://example.atlassian.net".into(),
    })
    .unwrap();

    assert_eq!(
        client.worklog_url("ABC-1", None).unwrap().as_str(),
        "https://example.atlassian.net/rest/api/3/issue/ABC-1/worklog"
    );
    assert_eq!(
        client.worklog_url("ABC-1", Some("100")).unwrap().as_str(),
        "https://example.atlassian.net/rest/api/3/issue/ABC-1/worklog/100"
    );
    assert_eq!(
        client.worklog_url("A/B?x#y", Some("1/2")).unwrap().as_str(),
        "https://example.atlassian.net/rest/api/3/issue/A%2FB%3Fx%23y/worklog/1%2F2"
    );
}
