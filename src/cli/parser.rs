use crate::timesheet::template::{DEFAULT_COLUMNS, DEFAULT_OUTFILE};
use clap::Parser;
use std::path::PathBuf;

/// Sync a weekly CSV timesheet with the tracker's worklogs
#[derive(Parser, Debug)]
#[command(
    name = "csv2worklogs",
    version = env!("CARGO_PKG_VERSION"),
    about = "Create or update Jira worklogs so they match a weekly CSV timesheet",
    long_about = "Create or update Jira worklogs so they match a weekly CSV timesheet.\n\n\
        Credentials come from JIRA_EMAIL, JIRA_API_TOKEN and JIRA_BASE_URL, \
        or from the optional config file."
)]
pub struct SyncCli {
    /// Path to timelog csv file
    pub filepath: PathBuf,

    /// Read credentials from this YAML file (default: ~/.timesheet-worklogs/config.yaml)
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<String>,
}

/// Generate a timesheet for the current week
#[derive(Parser, Debug)]
#[command(
    name = "make-timesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate a blank or templated timesheet CSV for the current week",
    long_about = None
)]
pub struct TemplateCli {
    /// Path to new csv file
    #[arg(long = "outfile", short = 'o', default_value = DEFAULT_OUTFILE)]
    pub outfile: PathBuf,

    /// Path to file to use as template
    #[arg(long = "template", short = 't')]
    pub template: Option<PathBuf>,

    /// Number of lefthand columns to keep from template
    #[arg(long = "columns", short = 'c', default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Overwrite template file
    #[arg(long = "overwrite")]
    pub overwrite: bool,
}
