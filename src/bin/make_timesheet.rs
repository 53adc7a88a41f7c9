//! make-timesheet entrypoint.

use timesheet_worklogs::run_template;

fn main() {
    if let Err(e) = run_template() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
