//! Time utilities for PDR Tracker.
//!
//! Calendar dates are ISO-8601 `YYYY-MM-DD` strings on records and
//! `chrono::NaiveDate` when compared.

use chrono::{Months, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date in local time.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Today's date as an ISO-8601 string.
pub fn today_iso() -> String {
    format_date(today())
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` string. Returns `None` for empty or malformed input.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// The date `months` calendar months before `date`, clamped to the end of
/// shorter months (2025-03-31 minus one month is 2025-02-28).
pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// Format a date for reports, e.g. "May 15, 2025".
pub fn long_date(s: &str) -> String {
    match parse_date(s) {
        Some(d) => d.format("%B %-d, %Y").to_string(),
        None => s.to_string(),
    }
}
