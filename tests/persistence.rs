//! State survives an engine restart through the JSON file store.

mod common;

use std::sync::Arc;

use common::{d, ScriptedPrompt};
use escala::domain::ports::keys;
use escala::domain::services::ShiftRotationCalculator;
use escala::{
    AbsenceType, EscalaError, FpPeriod, JsonFileStore, LeaveEngine, MemoryStore, SpecialDayKind,
    StoreError, VacationKind,
};
use serde_json::json;

type FileEngine = LeaveEngine<JsonFileStore, ScriptedPrompt>;

fn open(dir: &std::path::Path) -> FileEngine {
    LeaveEngine::load(
        JsonFileStore::new(dir.to_path_buf()),
        ScriptedPrompt::answering(true),
        ShiftRotationCalculator::new(),
    )
    .unwrap()
}

#[test]
fn all_four_collections_round_trip_across_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut engine = open(dir.path());
    let employee = engine
        .add_employee("João Silva", "A", Some("AGSE".into()), None, None)
        .unwrap();
    engine
        .add_absence(&employee.id, d("2025-04-01"), AbsenceType::Bh)
        .unwrap();
    engine
        .add_special_day(d("2025-04-21"), SpecialDayKind::Holiday)
        .unwrap();
    engine
        .register_vacation_fp(
            &employee.id,
            d("2025-05-01"),
            d("2025-05-15"),
            FpPeriod::FifteenDays,
        )
        .unwrap();
    drop(engine);

    let engine = open(dir.path());
    assert_eq!(engine.roster().get("1").unwrap().name, "João Silva");
    assert_eq!(
        engine.get_absence("1", d("2025-04-01")).unwrap().kind,
        AbsenceType::Bh
    );
    assert!(engine.is_special_day(d("2025-04-21"), SpecialDayKind::Holiday));
    let periods = engine.vacation_periods("1");
    assert_eq!(periods.len(), 1);
    assert_eq!(periods[0].kind, VacationKind::Fp);
    assert_eq!(periods[0].start_date, d("2025-05-01"));
}

#[test]
fn engine_loads_seeded_collections() {
    let store = Arc::new(MemoryStore::new());
    store.seed(
        keys::EMPLOYEES,
        json!([{"id": "1", "name": "João Silva", "team": "A"}]),
    );
    store.seed(
        keys::ABSENCES,
        json!([{"employeeId": "1", "date": "2025-04-01", "type": "L"}]),
    );

    let mut engine = LeaveEngine::load(
        Arc::clone(&store),
        ScriptedPrompt::answering(true),
        ShiftRotationCalculator::new(),
    )
    .unwrap();
    assert_eq!(engine.roster().get("1").unwrap().name, "João Silva");
    assert_eq!(
        engine.get_absence("1", d("2025-04-01")).unwrap().kind,
        AbsenceType::L
    );

    // A mutation writes its own collection alongside the seeded ones.
    engine
        .add_special_day(d("2025-04-21"), SpecialDayKind::Holiday)
        .unwrap();
    assert_eq!(store.key_count(), 3);
}

#[test]
fn corrupted_collection_fails_the_load() {
    let store = MemoryStore::new();
    store.seed(keys::EMPLOYEES, json!("not a collection"));

    let err = LeaveEngine::load(
        store,
        ScriptedPrompt::answering(true),
        ShiftRotationCalculator::new(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        EscalaError::Store(StoreError::Corrupted { .. })
    ));
}

#[test]
fn history_is_per_session_and_does_not_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut engine = open(dir.path());
    let employee = engine
        .add_employee("Maria Santos", "B", None, None, None)
        .unwrap();
    engine
        .add_absence(&employee.id, d("2025-04-01"), AbsenceType::Oa)
        .unwrap();
    drop(engine);

    let mut engine = open(dir.path());
    assert!(engine.history().is_empty());
    // Nothing to undo, but the record itself persisted.
    assert_eq!(engine.undo_last().unwrap(), None);
    assert!(engine.get_absence("1", d("2025-04-01")).is_some());
}
