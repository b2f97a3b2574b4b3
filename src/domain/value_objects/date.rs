//! Calendar primitives - pure date arithmetic over `NaiveDate`
//!
//! Dates are bare ISO calendar dates. Parsing goes through
//! `NaiveDate::parse_from_str` with an explicit format, so no time-of-day
//! or timezone can shift a date by a day.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EscalaError, EscalaResult};

const ISO_DATE: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string into a `NaiveDate`.
///
/// Strict: chrono tolerates unpadded components, so the parsed date is
/// formatted back and compared against the input to reject forms like
/// `2025-1-6`.
pub fn parse_date(input: &str) -> EscalaResult<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(input, ISO_DATE).map_err(|_| {
        EscalaError::InvalidDate {
            input: input.to_string(),
        }
    })?;
    if format_date(parsed) != input {
        return Err(EscalaError::InvalidDate {
            input: input.to_string(),
        });
    }
    Ok(parsed)
}

/// Format a date back to its `YYYY-MM-DD` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// Signed number of days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Every calendar day in `[start, end]` inclusive. Empty when `end < start`.
pub fn enumerate_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        current = current.succ_opt().expect("date range within chrono bounds");
    }
    days
}

/// Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
