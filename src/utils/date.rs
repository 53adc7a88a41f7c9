use chrono::{Datelike, Days, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Monday of the week containing `day`.
pub fn week_start(day: NaiveDate) -> NaiveDate {
    let offset = u64::from(day.weekday().num_days_from_monday());
    day - Days::new(offset)
}

/// The seven dates Monday..Sunday starting at `monday`.
pub fn week_dates(monday: NaiveDate) -> Vec<NaiveDate> {
    monday.iter_days().take(7).collect()
}
