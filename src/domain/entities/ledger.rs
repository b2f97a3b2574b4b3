//! Absence ledger - the authoritative one-record-per-employee-per-date store
//!
//! Keyed storage enforces the core invariant structurally: at most one
//! absence per (employee, date). Bulk writers pre-validate the whole batch
//! and reject it before touching the map, so a failed registration never
//! leaves partial state behind.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::AbsenceType;
use crate::error::{EscalaError, EscalaResult};

/// One employee absent on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceRecord {
    #[serde(rename = "employeeId")]
    pub employee_id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: AbsenceType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbsenceLedger {
    records: BTreeMap<(String, NaiveDate), AbsenceType>,
}

impl AbsenceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<AbsenceRecord>) -> Self {
        let mut ledger = Self::new();
        for record in records {
            // Last write wins on malformed input; the invariant holds
            // regardless of what the store handed us.
            ledger
                .records
                .insert((record.employee_id, record.date), record.kind);
        }
        ledger
    }

    pub fn get(&self, employee_id: &str, date: NaiveDate) -> Option<AbsenceRecord> {
        self.records
            .get(&(employee_id.to_string(), date))
            .map(|kind| AbsenceRecord {
                employee_id: employee_id.to_string(),
                date,
                kind: *kind,
            })
    }

    /// Insert a single record. Fails with `DuplicateAbsence` when the
    /// (employee, date) slot is already occupied; no mutation in that case.
    pub fn add(&mut self, employee_id: &str, date: NaiveDate, kind: AbsenceType) -> EscalaResult<()> {
        if let Some(existing) = self.records.get(&(employee_id.to_string(), date)) {
            return Err(EscalaError::DuplicateAbsence {
                date,
                existing: *existing,
            });
        }
        self.records.insert((employee_id.to_string(), date), kind);
        Ok(())
    }

    /// Re-insert a previously removed record, overwriting any occupant.
    /// Only the undo path uses this; regular writes go through `add`.
    pub fn restore(&mut self, record: AbsenceRecord) {
        self.records
            .insert((record.employee_id, record.date), record.kind);
    }

    /// Remove the record at (employee, date). Silent no-op when absent;
    /// returns the removed record so callers can journal it.
    pub fn remove(&mut self, employee_id: &str, date: NaiveDate) -> Option<AbsenceRecord> {
        self.records
            .remove(&(employee_id.to_string(), date))
            .map(|kind| AbsenceRecord {
                employee_id: employee_id.to_string(),
                date,
                kind,
            })
    }

    /// Records inside `dates` for one employee, any kind. Used by bulk
    /// registrants for collision pre-checks.
    pub fn existing_in(&self, employee_id: &str, dates: &[NaiveDate]) -> Vec<AbsenceRecord> {
        dates
            .iter()
            .filter_map(|date| self.get(employee_id, *date))
            .collect()
    }

    /// Insert one record per date, all of the same kind, atomically: every
    /// date is pre-checked and any collision rejects the entire batch
    /// before the first write.
    pub fn add_many(
        &mut self,
        employee_id: &str,
        dates: &[NaiveDate],
        kind: AbsenceType,
    ) -> EscalaResult<()> {
        let collisions = self.existing_in(employee_id, dates);
        if let (Some(first), Some(last)) = (collisions.first(), collisions.last()) {
            return Err(EscalaError::OverlappingPeriod {
                first: first.date,
                last: last.date,
                count: collisions.len(),
            });
        }
        for date in dates {
            self.records.insert((employee_id.to_string(), *date), kind);
        }
        Ok(())
    }

    /// Remove whatever records exist at the given dates, returning them.
    pub fn remove_many(&mut self, employee_id: &str, dates: &[NaiveDate]) -> Vec<AbsenceRecord> {
        dates
            .iter()
            .filter_map(|date| self.remove(employee_id, *date))
            .collect()
    }

    /// All records for one employee of one kind, ascending by date.
    pub fn records_of_kind(&self, employee_id: &str, kind: AbsenceType) -> Vec<AbsenceRecord> {
        self.records
            .iter()
            .filter(|((id, _), k)| id == employee_id && **k == kind)
            .map(|((id, date), k)| AbsenceRecord {
                employee_id: id.clone(),
                date: *date,
                kind: *k,
            })
            .collect()
    }

    /// Employee ids with any absence on `date`.
    pub fn absent_on(&self, date: NaiveDate) -> Vec<&str> {
        self.records
            .iter()
            .filter(|((_, d), _)| *d == date)
            .map(|((id, _), _)| id.as_str())
            .collect()
    }

    /// Drop every record belonging to an employee (roster deletion).
    pub fn remove_all_for(&mut self, employee_id: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|(id, _), _| id != employee_id);
        before - self.records.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Flat snapshot for persistence, ordered by (employee, date).
    pub fn to_records(&self) -> Vec<AbsenceRecord> {
        self.records
            .iter()
            .map(|((id, date), kind)| AbsenceRecord {
                employee_id: id.clone(),
                date: *date,
                kind: *kind,
            })
            .collect()
    }
}
