//! Local timesheet handling: reading the CSV grid, validating its date
//! headers and generating a fresh sheet for the current week.

pub mod reader;
pub mod template;
pub mod validate;

pub use reader::{read_csv, read_issue_logs};
pub use template::{TemplateOptions, build_rows, write_timesheet};
pub use validate::{check_issue_log_dates, is_iso_date};

/// Header of the column holding the issue key.
pub const ISSUE_COLUMN: &str = "Issue";

/// Header of the free-text column, never interpreted.
pub const NOTES_COLUMN: &str = "Notes";
