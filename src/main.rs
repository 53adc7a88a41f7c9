//! csv2worklogs entrypoint.

use timesheet_worklogs::run_sync;

fn main() {
    if let Err(e) = run_sync() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
