//! Calendar-window helpers for the weekly and monthly buckets

use chrono::{Datelike, Duration, Months, NaiveDate};

/// Returns the Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Returns the Monday of the week `offset` weeks before the one
/// containing `date`
pub fn weeks_back(date: NaiveDate, offset: u32) -> NaiveDate {
    week_start(date) - Duration::weeks(i64::from(offset))
}

/// Returns the first day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Returns the first day of the month `offset` months before the one
/// containing `date`
pub fn months_back(date: NaiveDate, offset: u32) -> NaiveDate {
    let start = month_start(date);
    start.checked_sub_months(Months::new(offset)).unwrap_or(start)
}

/// Returns the first day of the month after the one containing `date`
pub fn next_month_start(date: NaiveDate) -> NaiveDate {
    let start = month_start(date);
    start.checked_add_months(Months::new(1)).unwrap_or(start)
}
