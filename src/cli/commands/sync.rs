use crate::cli::parser::SyncCli;
use crate::config::Config;
use crate::core::reconcile::{ReconcileReport, reconcile};
use crate::errors::AppResult;
use crate::jira::JiraClient;
use crate::timesheet::{check_issue_log_dates, read_csv};
use crate::utils::path::expand_tilde;
use tracing::{info, warn};

pub fn handle(cli: &SyncCli) -> AppResult<ReconcileReport> {
    let config_path = cli.config.as_deref().map(expand_tilde);
    let credentials = Config::load(config_path.as_deref())?
        .with_env()
        .credentials()?;

    let issue_logs = read_csv(&cli.filepath)?;
    check_issue_log_dates(&issue_logs)?;

    let client = JiraClient::new(&credentials)?;
    let report = reconcile(&client, &credentials.email, &issue_logs)?;

    let summary = format!(
        "{} created, {} updated, {} unchanged, {} failed",
        report.created(),
        report.updated(),
        report.unchanged(),
        report.failed()
    );
    if report.failed() > 0 {
        warn!("{summary}");
    } else {
        info!("{summary}");
    }

    Ok(report)
}
