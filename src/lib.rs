//! timesheet-worklogs library root.
//! Exposes the CLI parsers, one `run_*` entry point per binary, and the
//! timesheet, tracker and reconciliation modules they are built from.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod jira;
pub mod models;
pub mod timesheet;
pub mod utils;

use clap::Parser;
use cli::parser::{SyncCli, TemplateCli};
use errors::AppResult;

/// Entry point of `csv2worklogs`
pub fn run_sync() -> AppResult<()> {
    let cli = SyncCli::parse();
    utils::logging::init();
    cli::commands::sync::handle(&cli).map(|_| ())
}

/// Entry point of `make-timesheet`
pub fn run_template() -> AppResult<()> {
    let cli = TemplateCli::parse();
    utils::logging::init();
    cli::commands::template::handle(&cli)
}
