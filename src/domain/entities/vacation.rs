//! Vacation book - registered FE/FP periods
//!
//! One record per contiguous registered run. Records are never edited in
//! place: cancelling deletes the record, re-registering creates a new one.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{FpPeriod, VacationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRecord {
    #[serde(rename = "employeeId")]
    pub employee_id: String,
    #[serde(rename = "type")]
    pub kind: VacationKind,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
    /// Calendar days in the span, inclusive.
    pub days: usize,
    /// Declared business days; FE only.
    #[serde(
        rename = "businessDays",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub business_days: Option<u32>,
    /// Requested shape; FP only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<FpPeriod>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VacationBook {
    records: Vec<VacationRecord>,
}

impl VacationBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<VacationRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: VacationRecord) {
        self.records.push(record);
    }

    pub fn for_employee(&self, employee_id: &str) -> Vec<&VacationRecord> {
        self.records
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .collect()
    }

    /// FE records for one employee whose start date falls in `year`.
    /// The annual entitlement is keyed by the start year of each period.
    pub fn fe_in_year(&self, employee_id: &str, year: i32) -> Vec<&VacationRecord> {
        self.records
            .iter()
            .filter(|r| {
                r.employee_id == employee_id
                    && r.kind == VacationKind::Fe
                    && r.start_date.year() == year
            })
            .collect()
    }

    pub fn find(
        &self,
        employee_id: &str,
        start_date: NaiveDate,
        kind: VacationKind,
    ) -> Option<&VacationRecord> {
        self.records.iter().find(|r| {
            r.employee_id == employee_id && r.start_date == start_date && r.kind == kind
        })
    }

    /// Delete the record matching (employee, start, kind). Returns the
    /// removed record; None means nothing matched (silent no-op upstream).
    pub fn remove(
        &mut self,
        employee_id: &str,
        start_date: NaiveDate,
        kind: VacationKind,
    ) -> Option<VacationRecord> {
        let index = self.records.iter().position(|r| {
            r.employee_id == employee_id && r.start_date == start_date && r.kind == kind
        })?;
        Some(self.records.remove(index))
    }

    pub fn remove_all_for(&mut self, employee_id: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.employee_id != employee_id);
        before - self.records.len()
    }

    pub fn all(&self) -> &[VacationRecord] {
        &self.records
    }
}
