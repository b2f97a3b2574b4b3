//! Shift rotation calculator
//!
//! Teams A-D rotate on a 4-day cycle anchored to a reference date on which
//! team A was on duty. Every other team works Monday through Friday.

use chrono::{Datelike, NaiveDate, Weekday};

/// Reference date: team A on duty, teams B/C/D on the following days.
pub const DEFAULT_ROTATION_ANCHOR: &str = "2024-08-04";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftRotationCalculator {
    anchor: NaiveDate,
}

impl Default for ShiftRotationCalculator {
    fn default() -> Self {
        Self {
            anchor: DEFAULT_ROTATION_ANCHOR
                .parse()
                .expect("default anchor is a valid date"),
        }
    }
}

impl ShiftRotationCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor(anchor: NaiveDate) -> Self {
        Self { anchor }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Position of a rotating team within the 4-day cycle.
    fn rotation_offset(team: &str) -> Option<i64> {
        match team {
            "A" => Some(0),
            "B" => Some(1),
            "C" => Some(2),
            "D" => Some(3),
            _ => None,
        }
    }

    /// Whether `team` is on duty on `date`.
    ///
    /// Rotating teams: active iff the signed day distance from the anchor,
    /// reduced modulo 4, lands on the team's offset. `rem_euclid` keeps
    /// the cycle position in 0..4 for dates before the anchor. Fixed
    /// teams: active on weekdays.
    pub fn is_active(&self, team: &str, date: NaiveDate) -> bool {
        match Self::rotation_offset(team) {
            Some(offset) => {
                let days_difference = (date - self.anchor).num_days();
                days_difference.rem_euclid(4) == offset
            }
            None => !matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
        }
    }
}
