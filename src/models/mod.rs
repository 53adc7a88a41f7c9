pub mod issue_logs;
pub mod worklog;

pub use issue_logs::{IssueLogs, TimeLogs};
pub use worklog::{RemoteWorklog, WorklogAuthor, WorklogPage, WorklogPayload, WorklogRaw};
