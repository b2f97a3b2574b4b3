//! Special day calendar - holiday and optional-holiday overlay
//!
//! Set-like: each (date, kind) pair exists at most once, and both add and
//! remove are idempotent. Callers append a history entry only when the
//! mutation actually changed something, which is why both return `bool`.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SpecialDayKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDay {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: SpecialDayKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialDayCalendar {
    days: BTreeSet<(NaiveDate, SpecialDayKind)>,
}

impl SpecialDayCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_days(days: Vec<SpecialDay>) -> Self {
        Self {
            days: days.into_iter().map(|d| (d.date, d.kind)).collect(),
        }
    }

    /// Mark a date. Returns false (no-op) if the pair already exists.
    pub fn add(&mut self, date: NaiveDate, kind: SpecialDayKind) -> bool {
        self.days.insert((date, kind))
    }

    /// Unmark a date. Returns false (no-op) if the pair was absent.
    pub fn remove(&mut self, date: NaiveDate, kind: SpecialDayKind) -> bool {
        self.days.remove(&(date, kind))
    }

    /// Exact (date, kind) membership test.
    pub fn contains(&self, date: NaiveDate, kind: SpecialDayKind) -> bool {
        self.days.contains(&(date, kind))
    }

    /// True when the date carries a marker of any kind.
    pub fn is_special(&self, date: NaiveDate) -> bool {
        self.contains(date, SpecialDayKind::Holiday)
            || self.contains(date, SpecialDayKind::OptionalHoliday)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Snapshot for persistence, ordered by date then kind.
    pub fn to_days(&self) -> Vec<SpecialDay> {
        self.days
            .iter()
            .map(|(date, kind)| SpecialDay {
                date: *date,
                kind: *kind,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn add_is_idempotent() {
        let mut calendar = SpecialDayCalendar::new();
        assert!(calendar.add(d("2025-04-21"), SpecialDayKind::Holiday));
        assert!(!calendar.add(d("2025-04-21"), SpecialDayKind::Holiday));
        assert_eq!(calendar.len(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut calendar = SpecialDayCalendar::new();
        calendar.add(d("2025-04-21"), SpecialDayKind::Holiday);
        assert!(calendar.remove(d("2025-04-21"), SpecialDayKind::Holiday));
        assert!(!calendar.remove(d("2025-04-21"), SpecialDayKind::Holiday));
        assert!(calendar.is_empty());
    }

    #[test]
    fn both_kinds_may_mark_the_same_date() {
        let mut calendar = SpecialDayCalendar::new();
        calendar.add(d("2025-06-19"), SpecialDayKind::Holiday);
        calendar.add(d("2025-06-19"), SpecialDayKind::OptionalHoliday);
        assert_eq!(calendar.len(), 2);
        assert!(calendar.contains(d("2025-06-19"), SpecialDayKind::Holiday));
        assert!(calendar.contains(d("2025-06-19"), SpecialDayKind::OptionalHoliday));
    }

    #[test]
    fn is_special_matches_any_kind() {
        let mut calendar = SpecialDayCalendar::new();
        calendar.add(d("2025-06-20"), SpecialDayKind::OptionalHoliday);
        assert!(calendar.is_special(d("2025-06-20")));
        assert!(!calendar.contains(d("2025-06-20"), SpecialDayKind::Holiday));
        assert!(!calendar.is_special(d("2025-06-21")));
    }
}
