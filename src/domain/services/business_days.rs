//! Business-day arithmetic
//!
//! A business day is a weekday that is not a registered holiday (F).
//! Optional holidays (PF) do not reduce the count: they mark the calendar
//! but employees still work.

use chrono::NaiveDate;

use crate::domain::entities::SpecialDayCalendar;
use crate::domain::value_objects::{is_weekend, SpecialDayKind};

/// Weekday and not a registered holiday.
pub fn is_business_day(date: NaiveDate, calendar: &SpecialDayCalendar) -> bool {
    !is_weekend(date) && !calendar.contains(date, SpecialDayKind::Holiday)
}

/// Business days in `[start, end]` inclusive. Zero when `end < start`.
pub fn business_days_between(
    start: NaiveDate,
    end: NaiveDate,
    calendar: &SpecialDayCalendar,
) -> u32 {
    let mut count = 0;
    let mut current = start;
    while current <= end {
        if is_business_day(current, calendar) {
            count += 1;
        }
        current = current.succ_opt().expect("date range within chrono bounds");
    }
    count
}
