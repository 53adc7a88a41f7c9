//! In-memory shape of a parsed timesheet.

use std::collections::BTreeMap;

/// Hours logged per date column for a single issue.
/// Keys are the raw (trimmed) header labels; they are only checked by the
/// date validator, never by the reader.
pub type TimeLogs = BTreeMap<String, f64>;

/// issue key → (date label → hours)
///
/// Ordered so that a run always walks issues and dates in the same order.
pub type IssueLogs = BTreeMap<String, TimeLogs>;
