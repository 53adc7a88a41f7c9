pub mod reconcile;

pub use reconcile::{Outcome, ReconcileReport, reconcile, submit_worklogs};
