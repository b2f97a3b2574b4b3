//! Sick-leave tracking (LTS)
//!
//! Registration is two-phase: `check_conflicts` produces a structured
//! overlap report without touching state, and the engine decides - via the
//! confirmation prompt or an explicit override flag - whether to proceed.
//! Proceeding overwrites whatever records occupy the span.

use chrono::NaiveDate;

use crate::domain::entities::AbsenceLedger;
use crate::domain::value_objects::AbsenceType;

/// Absence kinds that count as a period conflict for sick leave.
const CONFLICTING_KINDS: [AbsenceType; 3] = [AbsenceType::Fe, AbsenceType::Fp, AbsenceType::L];

/// Structured report of an overlap between a requested span and existing
/// leave records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapReport {
    pub first: NaiveDate,
    pub last: NaiveDate,
    pub count: usize,
}

/// One maximal run of consecutive sick-leave days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SickLeavePeriod {
    pub start_date: NaiveDate,
    pub days: usize,
}

/// Result of a prompt-driven registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SickLeaveOutcome {
    /// Records were written; `overwritten` existing records were replaced.
    Registered { overwritten: usize },
    /// The user declined the overlap override; nothing changed.
    Declined,
}

/// The `days` consecutive calendar dates starting at `start`.
pub fn span_dates(start: NaiveDate, days: u32) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(days as usize);
    let mut current = start;
    for _ in 0..days {
        dates.push(current);
        current = current.succ_opt().expect("date range within chrono bounds");
    }
    dates
}

/// Overlap between the requested span and existing FE/FP/L records.
/// Pure read; `None` means the span is clear.
pub fn check_conflicts(
    ledger: &AbsenceLedger,
    employee_id: &str,
    dates: &[NaiveDate],
) -> Option<OverlapReport> {
    let mut conflicting: Vec<NaiveDate> = ledger
        .existing_in(employee_id, dates)
        .into_iter()
        .filter(|r| CONFLICTING_KINDS.contains(&r.kind))
        .map(|r| r.date)
        .collect();
    conflicting.sort_unstable();
    let (first, last) = (*conflicting.first()?, *conflicting.last()?);
    Some(OverlapReport {
        first,
        last,
        count: conflicting.len(),
    })
}

/// All sick-leave records for one employee, grouped into maximal runs of
/// consecutive dates.
pub fn periods(ledger: &AbsenceLedger, employee_id: &str) -> Vec<SickLeavePeriod> {
    let records = ledger.records_of_kind(employee_id, AbsenceType::L);

    let mut result = Vec::new();
    let mut run_start: Option<NaiveDate> = None;
    let mut run_len = 0usize;
    let mut previous: Option<NaiveDate> = None;

    for record in records {
        let consecutive = previous
            .and_then(|p| p.succ_opt())
            .is_some_and(|next| next == record.date);
        if consecutive {
            run_len += 1;
        } else {
            if let Some(start) = run_start {
                result.push(SickLeavePeriod {
                    start_date: start,
                    days: run_len,
                });
            }
            run_start = Some(record.date);
            run_len = 1;
        }
        previous = Some(record.date);
    }
    if let Some(start) = run_start {
        result.push(SickLeavePeriod {
            start_date: start,
            days: run_len,
        });
    }
    result
}

/// Dates targeted by a cancellation: every sick-leave record for the
/// employee from `start` onward. Deliberately unbounded forward - it is
/// not limited to the run containing `start`.
pub fn cancellation_targets(
    ledger: &AbsenceLedger,
    employee_id: &str,
    start: NaiveDate,
) -> Vec<NaiveDate> {
    ledger
        .records_of_kind(employee_id, AbsenceType::L)
        .into_iter()
        .filter(|r| r.date >= start)
        .map(|r| r.date)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn ledger_with(records: &[(&str, &str, AbsenceType)]) -> AbsenceLedger {
        let mut ledger = AbsenceLedger::new();
        for (id, date, kind) in records {
            ledger.add(id, d(date), *kind).unwrap();
        }
        ledger
    }

    #[test]
    fn span_dates_are_consecutive() {
        let dates = span_dates(d("2025-04-01"), 5);
        assert_eq!(dates.len(), 5);
        assert_eq!(dates[0], d("2025-04-01"));
        assert_eq!(dates[4], d("2025-04-05"));
    }

    #[test]
    fn conflicts_only_count_leave_kinds() {
        let ledger = ledger_with(&[
            ("1", "2025-04-02", AbsenceType::Bh),
            ("1", "2025-04-03", AbsenceType::Fe),
            ("1", "2025-04-04", AbsenceType::L),
        ]);
        let report = check_conflicts(&ledger, "1", &span_dates(d("2025-04-01"), 5)).unwrap();
        assert_eq!(report.first, d("2025-04-03"));
        assert_eq!(report.last, d("2025-04-04"));
        assert_eq!(report.count, 2);
    }

    #[test]
    fn no_report_when_span_is_clear() {
        let ledger = ledger_with(&[("1", "2025-04-10", AbsenceType::L)]);
        assert!(check_conflicts(&ledger, "1", &span_dates(d("2025-04-01"), 5)).is_none());
    }

    #[test]
    fn periods_group_consecutive_runs() {
        let ledger = ledger_with(&[
            ("1", "2025-04-01", AbsenceType::L),
            ("1", "2025-04-02", AbsenceType::L),
            ("1", "2025-04-03", AbsenceType::L),
            ("1", "2025-04-10", AbsenceType::L),
            ("1", "2025-04-11", AbsenceType::L),
        ]);
        let periods = periods(&ledger, "1");
        assert_eq!(
            periods,
            vec![
                SickLeavePeriod {
                    start_date: d("2025-04-01"),
                    days: 3
                },
                SickLeavePeriod {
                    start_date: d("2025-04-10"),
                    days: 2
                },
            ]
        );
    }

    #[test]
    fn cancellation_reaches_past_the_selected_run() {
        let ledger = ledger_with(&[
            ("1", "2025-04-01", AbsenceType::L),
            ("1", "2025-04-02", AbsenceType::L),
            ("1", "2025-04-10", AbsenceType::L),
        ]);
        // Cancelling from 04-01 also takes the later, disjoint run.
        let targets = cancellation_targets(&ledger, "1", d("2025-04-01"));
        assert_eq!(
            targets,
            vec![d("2025-04-01"), d("2025-04-02"), d("2025-04-10")]
        );
        // Cancelling mid-run leaves earlier days in place.
        let targets = cancellation_targets(&ledger, "1", d("2025-04-02"));
        assert_eq!(targets, vec![d("2025-04-02"), d("2025-04-10")]);
    }
}
