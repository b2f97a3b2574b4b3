//! Vacation entitlement - statutory (FE) and premium (FP) leave
//!
//! Registration is planned as a pure computation over current state and
//! only applied by the engine once every rule passes, so a rejected
//! request can never leave partial records behind.
//!
//! FE rules, per calendar year keyed by the start date of each period:
//! either one 25-business-day period, or a split pair drawn from the
//! allowed combinations summing to 25. The caller declares the business
//! days and the engine recomputes them over the span; a disagreement is a
//! validation error. FP has no annual cap.

use chrono::{Datelike, NaiveDate};

use crate::domain::entities::{AbsenceLedger, SpecialDayCalendar, VacationBook, VacationRecord};
use crate::domain::services::business_days_between;
use crate::domain::value_objects::{enumerate_days, FpPeriod, VacationKind};
use crate::error::{EscalaError, EscalaResult};

/// Annual statutory vacation entitlement in business days.
pub const FE_ANNUAL_CAP: u32 = 25;

/// Business-day counts a single FE registration may declare.
pub const FE_ALLOWED_DAYS: [u32; 7] = [10, 11, 12, 13, 14, 15, 25];

/// Allowed (first, second) split combinations. Each pair sums to the cap.
pub const FE_SPLIT_PAIRS: [(u32, u32); 6] =
    [(10, 15), (15, 10), (11, 14), (14, 11), (12, 13), (13, 12)];

/// A validated registration, ready to apply atomically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacationPlan {
    pub record: VacationRecord,
    pub dates: Vec<NaiveDate>,
}

fn check_span(start: NaiveDate, end: NaiveDate) -> EscalaResult<Vec<NaiveDate>> {
    if end <= start {
        return Err(EscalaError::validation(
            "the end date must be after the start date",
        ));
    }
    Ok(enumerate_days(start, end))
}

fn check_overlap(
    ledger: &AbsenceLedger,
    employee_id: &str,
    dates: &[NaiveDate],
) -> EscalaResult<()> {
    let existing = ledger.existing_in(employee_id, dates);
    if let (Some(first), Some(last)) = (existing.first(), existing.last()) {
        return Err(EscalaError::OverlappingPeriod {
            first: first.date,
            last: last.date,
            count: existing.len(),
        });
    }
    Ok(())
}

/// Validate a statutory vacation request and produce the plan.
///
/// The marking is broader than the count: every calendar day in the span
/// becomes an FE record, weekends and holidays included; only the
/// business-day arithmetic skips them.
pub fn plan_fe(
    ledger: &AbsenceLedger,
    book: &VacationBook,
    calendar: &SpecialDayCalendar,
    employee_id: &str,
    start: NaiveDate,
    end: NaiveDate,
    declared_business_days: u32,
) -> EscalaResult<VacationPlan> {
    let dates = check_span(start, end)?;

    if !FE_ALLOWED_DAYS.contains(&declared_business_days) {
        return Err(EscalaError::validation(
            "statutory vacation must cover 10, 11, 12, 13, 14, 15 or 25 business days",
        ));
    }

    let actual = business_days_between(start, end, calendar);
    if actual != declared_business_days {
        return Err(EscalaError::validation(format!(
            "the selected period contains {actual} business days, \
             but {declared_business_days} were requested - adjust the dates"
        )));
    }

    check_overlap(ledger, employee_id, &dates)?;

    let year = start.year();
    let year_records = book.fe_in_year(employee_id, year);

    if year_records
        .iter()
        .any(|r| r.business_days == Some(FE_ANNUAL_CAP))
    {
        return Err(EscalaError::validation(format!(
            "a full 25-business-day statutory vacation is already registered for {year}"
        )));
    }

    let used: u32 = year_records
        .iter()
        .map(|r| r.business_days.unwrap_or(0))
        .sum();
    if used + declared_business_days > FE_ANNUAL_CAP {
        return Err(EscalaError::validation(format!(
            "annual statutory vacation cap of {FE_ANNUAL_CAP} business days \
             exceeded for {year} ({used} already registered)"
        )));
    }

    if year_records.len() == 1 {
        let existing = year_records[0].business_days.unwrap_or(0);
        let valid_pair = FE_SPLIT_PAIRS
            .iter()
            .any(|(first, second)| existing == *first && declared_business_days == *second);
        if !valid_pair {
            return Err(EscalaError::validation(format!(
                "invalid split combination: {existing} business days already \
                 registered, {declared_business_days} requested"
            )));
        }
    }

    let record = VacationRecord {
        employee_id: employee_id.to_string(),
        kind: VacationKind::Fe,
        start_date: start,
        end_date: end,
        days: dates.len(),
        business_days: Some(declared_business_days),
        period: None,
    };
    Ok(VacationPlan { record, dates })
}

/// Validate a premium leave request and produce the plan.
pub fn plan_fp(
    ledger: &AbsenceLedger,
    employee_id: &str,
    start: NaiveDate,
    end: NaiveDate,
    period: FpPeriod,
) -> EscalaResult<VacationPlan> {
    let dates = check_span(start, end)?;

    let span = dates.len() as i64;
    if !period.accepts(span) {
        let expected = match period {
            FpPeriod::FifteenDays => "exactly 15 calendar days",
            FpPeriod::OneMonth => "between 28 and 32 calendar days",
        };
        return Err(EscalaError::validation(format!(
            "premium leave of {expected} required, the selected period has {span} days"
        )));
    }

    check_overlap(ledger, employee_id, &dates)?;

    let record = VacationRecord {
        employee_id: employee_id.to_string(),
        kind: VacationKind::Fp,
        start_date: start,
        end_date: end,
        days: dates.len(),
        business_days: None,
        period: Some(period),
    };
    Ok(VacationPlan { record, dates })
}

/// Dates removed by a cancellation: every absence of the vacation's kind
/// for the employee dated `start` or later. Unbounded forward, matching
/// the cancellation semantics of sick leave.
pub fn cancellation_targets(
    ledger: &AbsenceLedger,
    employee_id: &str,
    start: NaiveDate,
    kind: VacationKind,
) -> Vec<NaiveDate> {
    ledger
        .records_of_kind(employee_id, kind.as_absence_type())
        .into_iter()
        .filter(|r| r.date >= start)
        .map(|r| r.date)
        .collect()
}
