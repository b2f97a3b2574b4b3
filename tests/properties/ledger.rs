//! Property tests for the absence ledger.

use chrono::NaiveDate;
use proptest::prelude::*;

use escala::{AbsenceLedger, AbsenceType};

fn any_kind() -> impl Strategy<Value = AbsenceType> {
    proptest::sample::select(AbsenceType::ALL.to_vec())
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // A two-year window is plenty of collision pressure for ~30 ops.
    (0i64..730).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .checked_add_days(chrono::Days::new(offset as u64))
            .unwrap()
    })
}

#[derive(Debug, Clone)]
enum Op {
    Add(NaiveDate, AbsenceType),
    Remove(NaiveDate),
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any_date(), any_kind()).prop_map(|(d, k)| Op::Add(d, k)),
        any_date().prop_map(Op::Remove),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: No operation sequence can produce two records for the
    /// same (employee, date) slot, and the record listing stays sorted.
    #[test]
    fn property_at_most_one_record_per_slot(
        ops in proptest::collection::vec(any_op(), 0..=30)
    ) {
        let mut ledger = AbsenceLedger::new();
        for op in ops {
            match op {
                // A duplicate add errors; either way the slot invariant
                // must hold afterwards.
                Op::Add(date, kind) => { let _ = ledger.add("1", date, kind); }
                Op::Remove(date) => { ledger.remove("1", date); }
            }
        }
        let records = ledger.to_records();
        let mut slots: Vec<_> = records.iter().map(|r| (&r.employee_id, r.date)).collect();
        let before = slots.len();
        slots.dedup();
        prop_assert_eq!(slots.len(), before);
        prop_assert!(records.windows(2).all(|w| w[0].date < w[1].date));
    }

    /// PROPERTY: A batch insert is atomic - one occupied slot anywhere in
    /// the span leaves the whole ledger exactly as it was.
    #[test]
    fn property_batch_add_is_all_or_nothing(
        dates in proptest::collection::btree_set(any_date(), 1..=15),
        occupied_index in any::<prop::sample::Index>(),
        kind in any_kind(),
    ) {
        let dates: Vec<NaiveDate> = dates.into_iter().collect();
        let occupied = dates[occupied_index.index(dates.len())];

        let mut ledger = AbsenceLedger::new();
        ledger.add("1", occupied, AbsenceType::Bh).unwrap();
        let before = ledger.to_records();

        prop_assert!(ledger.add_many("1", &dates, kind).is_err());
        prop_assert_eq!(ledger.to_records(), before);
    }

    /// PROPERTY: remove_many returns exactly the records that were
    /// present, and those slots are empty afterwards.
    #[test]
    fn property_remove_many_returns_what_was_present(
        present in proptest::collection::btree_set(any_date(), 0..=15),
        requested in proptest::collection::btree_set(any_date(), 0..=15),
    ) {
        let mut ledger = AbsenceLedger::new();
        for date in &present {
            ledger.add("1", *date, AbsenceType::L).unwrap();
        }
        let requested: Vec<NaiveDate> = requested.into_iter().collect();
        let removed = ledger.remove_many("1", &requested);

        let expected: Vec<NaiveDate> = requested
            .iter()
            .copied()
            .filter(|d| present.contains(d))
            .collect();
        let removed_dates: Vec<NaiveDate> = removed.iter().map(|r| r.date).collect();
        prop_assert_eq!(removed_dates, expected);
        for date in &requested {
            prop_assert!(ledger.get("1", *date).is_none());
        }
    }
}
