//! Integration tests for the store's public API.

use std::collections::BTreeMap;
use std::fs;

use chrono::{Duration, TimeZone, Utc};
use liftlog::clock::FixedClock;
use liftlog::model::{ExerciseSpec, RawSet, SetResult};
use liftlog::storage::{FileStorage, MemoryStorage, Storage, STORAGE_KEY};
use liftlog::store::{StoreOptions, WorkoutStore};
use liftlog::LiftlogError;
use tempfile::TempDir;

fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap())
}

#[test]
fn file_store_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let (workout, bench) = {
        let mut store = WorkoutStore::open_with(
            FileStorage::new(temp.path()),
            clock(),
            StoreOptions::default(),
        )
        .unwrap();
        let program = store.add_program("Upper/Lower").unwrap();
        let workout = store
            .add_workout(program.as_str(), "Upper", "Heavy")
            .unwrap()
            .unwrap();
        let bench = store
            .add_exercise(workout.as_str(), &ExerciseSpec::new("Bench").reps(5, 8))
            .unwrap()
            .unwrap();
        store
            .save_set_result(workout.as_str(), bench.as_str(), 1, &RawSet::new("90", "6"))
            .unwrap();
        (workout, bench)
    };

    let store = WorkoutStore::open_with(
        FileStorage::new(temp.path()),
        clock(),
        StoreOptions::default(),
    )
    .unwrap();
    let doc = store.snapshot();
    let session = &doc.workouts[workout.as_str()].sessions[0];
    assert_eq!(
        session.results_for(bench.as_str()),
        &[
            Some(SetResult::skipped()),
            Some(SetResult::new(Some(90.0), Some(6)))
        ]
    );
}

#[test]
fn corrupt_data_is_replaced_by_seed() {
    let storage = MemoryStorage::with_value(STORAGE_KEY, "{not json");
    let store = WorkoutStore::open(storage).unwrap();
    assert_eq!(store.document().programs[0].name, "Base Strength");
}

#[test]
fn one_session_per_day() {
    let clock = clock();
    let mut store =
        WorkoutStore::open_with(MemoryStorage::new(), clock.clone(), StoreOptions::default())
            .unwrap();
    let doc = store.snapshot();
    let day1 = doc.program_workouts(&doc.programs[0]).next().unwrap();
    let (wid, eid) = (day1.id.clone(), day1.exercises[0].id.clone());

    store
        .save_set_result(wid.as_str(), eid.as_str(), 0, &RawSet::new("100", "5"))
        .unwrap();
    store
        .save_set_result(wid.as_str(), eid.as_str(), 1, &RawSet::new("100", "5"))
        .unwrap();
    assert_eq!(store.document().workouts[wid.as_str()].sessions.len(), 1);

    clock.advance(Duration::days(1));
    store
        .save_set_result(wid.as_str(), eid.as_str(), 0, &RawSet::new("102.5", "5"))
        .unwrap();
    let sessions = &store.document().workouts[wid.as_str()].sessions;
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[1].results_for(eid.as_str()).len(), 1);
}

#[test]
fn strict_store_reports_unknown_ids() {
    let options = StoreOptions {
        strict: true,
        ..Default::default()
    };
    let mut store = WorkoutStore::open_with(MemoryStorage::new(), clock(), options).unwrap();
    let err = store.rename_program("missing", "X").unwrap_err();
    assert!(matches!(err, LiftlogError::NotFound { kind: "Program", .. }));
}

#[test]
fn permissive_store_ignores_unknown_ids() {
    let mut store = WorkoutStore::open(MemoryStorage::new()).unwrap();
    let before = store.snapshot();
    store.rename_program("missing", "X").unwrap();
    assert_eq!(store.add_session("missing", BTreeMap::new()).unwrap(), None);
    assert_eq!(*store.snapshot(), *before);
}

#[test]
fn backup_file_restores_into_new_store() {
    let temp = TempDir::new().unwrap();
    let mut source = WorkoutStore::open(MemoryStorage::new()).unwrap();
    source.add_program("Extra").unwrap();
    let backup = temp.path().join("backup.json");
    fs::write(&backup, source.export_data().unwrap()).unwrap();

    let mut target = WorkoutStore::open(FileStorage::new(temp.path().join("data"))).unwrap();
    target
        .import_data(&fs::read_to_string(&backup).unwrap())
        .unwrap();
    assert_eq!(*target.snapshot(), *source.snapshot());
    assert!(target.storage().get(STORAGE_KEY).unwrap().is_some());

#[test]
fn non_utf8_data_file_is_replaced_by_seed() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());
    fs::write(storage.path_for(STORAGE_KEY), [0xFF, 0xFE, 0x00]).unwrap();

    let store = WorkoutStore::open_with(storage, clock(), StoreOptions::default()).unwrap();
    assert_eq!(store.document().programs[0].name, "Base Strength");
    let raw = fs::read_to_string(temp.path().join("swt_data_v1.json")).unwrap();
    assert!(raw.contains("Base Strength"));
}
}
