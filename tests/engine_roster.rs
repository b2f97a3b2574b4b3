//! Roster operations through the engine.

mod common;

use common::{d, engine_with_roster};
use escala::domain::ports::keys;
use escala::{AbsenceType, EmployeeUpdate, EscalaError, FpPeriod};

#[test]
fn ids_are_assigned_sequentially() {
    let (mut engine, _) = engine_with_roster(true);
    let employee = engine
        .add_employee("Pedro Costa", "C", None, None, None)
        .unwrap();
    assert_eq!(employee.id, "5");
}

#[test]
fn update_applies_only_the_given_fields() {
    let (mut engine, _) = engine_with_roster(true);
    let changed = engine
        .update_employee(
            "1",
            EmployeeUpdate {
                role: Some(Some("Supervisor".into())),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(changed);
    let employee = engine.roster().get("1").unwrap();
    assert_eq!(employee.role.as_deref(), Some("Supervisor"));
    assert_eq!(employee.name, "João Silva");

    // An explicit Some(None) clears an optional field.
    engine
        .update_employee(
            "1",
            EmployeeUpdate {
                role: Some(None),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(engine.roster().get("1").unwrap().role.is_none());
}

#[test]
fn update_of_unknown_id_is_a_silent_noop() {
    let (mut engine, _) = engine_with_roster(true);
    let changed = engine
        .update_employee("99", EmployeeUpdate::default())
        .unwrap();
    assert!(!changed);
}

#[test]
fn move_to_unknown_employee_errors() {
    let (mut engine, _) = engine_with_roster(true);
    let err = engine.move_employee_to_team("99", "B").unwrap_err();
    assert!(matches!(err, EscalaError::UnknownEmployee { .. }));
}

#[test]
fn delete_removes_all_records_of_the_employee() {
    let (mut engine, store) = engine_with_roster(true);
    engine
        .add_absence("1", d("2025-04-01"), AbsenceType::Bh)
        .unwrap();
    engine
        .register_vacation_fp("1", d("2025-05-01"), d("2025-05-15"), FpPeriod::FifteenDays)
        .unwrap();
    engine
        .add_absence("2", d("2025-04-01"), AbsenceType::Oa)
        .unwrap();

    assert!(engine.delete_employee("1").unwrap());
    assert!(engine.roster().get("1").is_none());
    assert!(engine.get_absence("1", d("2025-04-01")).is_none());
    assert!(engine.vacation_periods("1").is_empty());
    // Other employees keep their records.
    assert!(engine.get_absence("2", d("2025-04-01")).is_some());

    let saved = store.document(keys::ABSENCES).unwrap();
    assert_eq!(saved.as_array().unwrap().len(), 1);
}

#[test]
fn declined_deletion_keeps_the_employee() {
    let (mut engine, _) = engine_with_roster(false);
    assert!(!engine.delete_employee("1").unwrap());
    assert!(engine.roster().get("1").is_some());
    assert_eq!(engine.prompt().times_asked(), 1);
}

#[test]
fn deleting_an_unknown_id_skips_the_prompt() {
    let (mut engine, _) = engine_with_roster(true);
    assert!(!engine.delete_employee("99").unwrap());
    assert_eq!(engine.prompt().times_asked(), 0);
}
