//! Unified application error type.
//! Every module (timesheet, jira, core, cli) returns AppError so both binaries
//! can report failures the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Pre-flight (config, parsing, validation)
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error(
        "{0} is an invalid date format. Format date column headers in the format YYYY-MM-DD."
    )]
    Validation(String),

    // ---------------------------
    // Remote tracker
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response format: {0}")]
    Format(String),

    #[error("Request for issue {issue} failed with status {status}")]
    Remote { issue: String, status: u16 },

    // ---------------------------
    // Template generator
    // ---------------------------
    #[error(
        "Template and output file are the same ({0}); use --overwrite to overwrite the template file"
    )]
    OverwriteRefused(String),
}

pub type AppResult<T> = Result<T, AppError>;
