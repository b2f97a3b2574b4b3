//! Property tests for the shift rotation calculator.

use chrono::NaiveDate;
use proptest::prelude::*;

use escala::ShiftRotationCalculator;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // A decade on either side of the default anchor.
    (-3650i64..=3650).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 8, 4)
            .unwrap()
            .checked_add_signed(chrono::Duration::days(offset))
            .unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Exactly one rotating team is on duty on any date, before
    /// or after the anchor.
    #[test]
    fn property_exactly_one_rotating_team_active(date in any_date()) {
        let calc = ShiftRotationCalculator::new();
        let active = ["A", "B", "C", "D"]
            .into_iter()
            .filter(|team| calc.is_active(team, date))
            .count();
        prop_assert_eq!(active, 1);
    }

    /// PROPERTY: The cycle has period 4: a team's duty state on any date
    /// matches its state four days later.
    #[test]
    fn property_rotation_has_period_four(date in any_date()) {
        let calc = ShiftRotationCalculator::new();
        let later = date + chrono::Duration::days(4);
        for team in ["A", "B", "C", "D"] {
            prop_assert_eq!(calc.is_active(team, date), calc.is_active(team, later));
        }
    }

    /// PROPERTY: Moving the anchor by a whole number of cycles changes
    /// nothing.
    #[test]
    fn property_anchor_is_stable_modulo_cycles(date in any_date(), cycles in -50i64..=50) {
        let default_anchor = NaiveDate::from_ymd_opt(2024, 8, 4).unwrap();
        let shifted =
            ShiftRotationCalculator::with_anchor(default_anchor + chrono::Duration::days(4 * cycles));
        let reference = ShiftRotationCalculator::new();
        for team in ["A", "B", "C", "D"] {
            prop_assert_eq!(reference.is_active(team, date), shifted.is_active(team, date));
        }
    }
}
