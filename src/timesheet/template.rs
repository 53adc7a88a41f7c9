//! Generation of a new timesheet for a given week.
//!
//! Without a template the sheet is two rows: two blank label cells followed by
//! the week's dates, then two blank cells. With a template, the leading
//! non-date header cells are carried forward, the second row gets weekday
//! labels, and every later row keeps only its first `columns` cells.

use crate::errors::{AppError, AppResult};
use crate::timesheet::validate::is_iso_date;
use crate::utils::date::week_dates;
use crate::utils::path::same_file;
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tues", "Wed", "Thurs", "Fri", "Sat", "Sun"];

pub const DEFAULT_OUTFILE: &str = "timesheet.csv";
pub const DEFAULT_COLUMNS: usize = 2;

#[derive(Debug, Clone)]
pub struct TemplateOptions {
    pub outfile: PathBuf,
    pub template: Option<PathBuf>,
    pub columns: usize,
    pub overwrite: bool,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            outfile: PathBuf::from(DEFAULT_OUTFILE),
            template: None,
            columns: DEFAULT_COLUMNS,
            overwrite: false,
        }
    }
}

/// Build the rows of a new timesheet for the week starting at `monday`.
pub fn build_rows(
    monday: NaiveDate,
    template: Option<&[Vec<String>]>,
    columns: usize,
) -> AppResult<Vec<Vec<String>>> {
    let dates: Vec<String> = week_dates(monday)
        .iter()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect();

    let Some(template) = template else {
        let mut header = vec![String::new(); 2];
        header.extend(dates);
        return Ok(vec![header, vec![String::new(); 2]]);
    };

    let (first, rest) = template
        .split_first()
        .ok_or_else(|| AppError::Parse("template file has no header row".into()))?;

    let mut header: Vec<String> = first
        .iter()
        .take_while(|cell| !is_iso_date(cell))
        .cloned()
        .collect();
    let mut weekdays = vec![String::new(); header.len()];
    header.extend(dates);
    weekdays.extend(WEEKDAY_LABELS.iter().map(|s| s.to_string()));

    let mut rows = vec![header, weekdays];

    // rest[0] was the previous weekday row
    for row in rest.iter().skip(1) {
        let mut kept: Vec<String> = row.iter().take(columns).cloned().collect();
        kept.resize(columns, String::new());
        rows.push(kept);
    }

    Ok(rows)
}

/// Read every row of a template as plain strings.
pub fn read_template<R: Read>(input: R) -> AppResult<Vec<Vec<String>>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::new();
    for record in rdr.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

pub fn write_rows<W: Write>(output: W, rows: &[Vec<String>]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(output);
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Generate the sheet for the week starting at `monday` and write it to `opts.outfile`.
///
/// Refuses to touch the template itself unless `opts.overwrite` is set. The
/// template is read completely before the output is created.
pub fn write_timesheet(opts: &TemplateOptions, monday: NaiveDate) -> AppResult<Vec<Vec<String>>> {
    if let Some(template) = &opts.template
        && !opts.overwrite
        && same_file(&opts.outfile, template)
    {
        return Err(AppError::OverwriteRefused(template.display().to_string()));
    }

    let template_rows = match &opts.template {
        Some(path) => Some(read_template(File::open(path)?)?),
        None => None,
    };

    let rows = build_rows(monday, template_rows.as_deref(), opts.columns)?;

    write_rows(File::create(&opts.outfile)?, &rows)?;
    Ok(rows)
}
