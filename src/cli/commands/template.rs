use crate::cli::parser::TemplateCli;
use crate::errors::AppResult;
use crate::timesheet::{TemplateOptions, write_timesheet};
use crate::utils::date::{today, week_start};
use tracing::info;

pub fn handle(cli: &TemplateCli) -> AppResult<()> {
    let opts = TemplateOptions {
        outfile: cli.outfile.clone(),
        template: cli.template.clone(),
        columns: cli.columns,
        overwrite: cli.overwrite,
    };

    let monday = week_start(today());
    let rows = write_timesheet(&opts, monday)?;

    info!(
        outfile = %opts.outfile.display(),
        rows = rows.len() as u64,
        week = %monday,
        "Timesheet written"
    );
    Ok(())
}
