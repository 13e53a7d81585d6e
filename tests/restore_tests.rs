// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Restoring a session from saved workouts.

use mapty::db::{keys, KeyValueStore, MemoryStore};
use mapty::models::{WorkoutDetail, WorkoutKind};
use mapty::session::MapStatus;
use mapty::SessionEvent;

mod common;
use common::{home, restore_session, restore_session_with_broken_map, Call};

fn store_with(json: &str) -> MemoryStore {
    let store = MemoryStore::new();
    store.set(keys::WORKOUTS, json).unwrap();
    store
}

#[test]
fn test_restore_cycling_entry_before_markers() {
    let store = store_with(
        r#"[{"id":"ride-1","date":"2024-04-14T09:30:00Z","coords":[39,-12],
             "kind":"cycling","distance":27,"duration":95,"elevationGain":523}]"#,
    );

    let (mut session, log) = restore_session(store);

    assert_eq!(session.workouts().len(), 1);
    let ride = &session.workouts()[0];
    assert_eq!(ride.kind(), WorkoutKind::Cycling);
    assert_eq!(ride.derived_metric(), 27.0 / (95.0 / 60.0));
    assert!((ride.derived_metric() - 17.05).abs() < 0.01);
    assert_eq!(ride.description(), "Cycling on April 14");

    // Listed immediately, no marker until the map is ready
    assert_eq!(log.borrow().as_slice(), &[Call::Entry("ride-1".to_string())]);

    session.handle(SessionEvent::PositionResolved(home()));
    session.handle(SessionEvent::MapReady);

    let calls = log.borrow();
    assert_eq!(calls[0], Call::Entry("ride-1".to_string()));
    assert_eq!(calls[1], Call::MapInitialized(home(), 13));
    assert_eq!(
        calls[2],
        Call::Marker(
            home(),
            "🚴‍♀️ Cycling on April 14".to_string(),
            "cycling-popup".to_string()
        )
    );
    assert_eq!(calls.len(), 3);
}

#[test]
fn test_repeated_map_ready_places_markers_once() {
    let store = store_with(
        r#"[{"kind":"running","coords":[39,-12],"distance":5.2,"duration":24,"cadence":178},
            {"kind":"cycling","coords":[40,-11],"distance":27,"duration":95,"elevationGain":523}]"#,
    );
    let (mut session, log) = restore_session(store);

    session.on_map_ready();
    session.on_map_ready();

    let markers = log
        .borrow()
        .iter()
        .filter(|c| matches!(c, Call::Marker(..)))
        .count();
    assert_eq!(markers, 2);
    assert_eq!(session.map_status(), MapStatus::Ready);
}

#[test]
fn test_restore_recomputes_tampered_metrics() {
    let store = store_with(
        r#"[{"id":"run-1","kind":"running","coords":[39,-12],"distance":5.2,"duration":24,
             "cadence":178,"pace":1.0,"description":"Fastest run ever","clicks":4}]"#,
    );

    let (session, _log) = restore_session(store);

    let run = &session.workouts()[0];
    assert_eq!(run.derived_metric(), 24.0 / 5.2);
    assert!(run.description().starts_with("Running on "));
    assert_eq!(run.clicks(), 4);
    assert!(matches!(
        run.detail(),
        WorkoutDetail::Running {
            cadence_spm: 178,
            ..
        }
    ));
}

#[test]
fn test_restore_accepts_legacy_type_field() {
    let store = store_with(
        r#"[{"date":"2024-04-14T09:30:00.000Z","id":"1713087000","clicks":0,
             "coords":[39,-12],"distance":5.2,"duration":24,"type":"running",
             "cadence":178,"pace":4.615384615384615,
             "description":"Running on \n                            April 0"}]"#,
    );

    let (session, _log) = restore_session(store);

    assert_eq!(session.workouts().len(), 1);
    assert_eq!(session.workouts()[0].id().as_str(), "1713087000");
    assert_eq!(session.workouts()[0].description(), "Running on April 14");
}

#[test]
fn test_odd_optional_fields_keep_the_workout() {
    let store = store_with(
        r#"[{"id":"nan-clicks","clicks":null,"kind":"running","coords":[39,-12],
             "distance":5.2,"duration":24,"cadence":178},
            {"id":"float-clicks","clicks":2.0,"kind":"running","coords":[39,-12],
             "distance":5.2,"duration":24,"cadence":178},
            {"id":1713087000,"kind":"running","coords":[39,-12],
             "distance":5.2,"duration":24,"cadence":178}]"#,
    );

    let (session, log) = restore_session(store);

    let restored: Vec<(&str, u32)> = session
        .workouts()
        .iter()
        .map(|w| (w.id().as_str(), w.clicks()))
        .collect();
    assert_eq!(
        restored,
        vec![("nan-clicks", 0), ("float-clicks", 2), ("1713087000", 0)]
    );
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn test_corrupt_snapshot_restores_empty() {
    let (session, log) = restore_session(store_with("[{\"kind\": \"running\", "));
    assert!(session.workouts().is_empty());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_unreadable_entries_are_skipped() {
    let store = store_with(
        r#"[{"kind":"running","coords":[39,-12],"distance":5.2,"duration":24,"cadence":178},
            {"kind":"running","coords":[39,-12],"distance":-1,"duration":24,"cadence":178},
            {"kind":"cycling","coords":[39,-12],"distance":10,"duration":30}]"#,
    );

    let (session, log) = restore_session(store);

    assert_eq!(session.workouts().len(), 1);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn test_unknown_kind_entry_is_skipped() {
    let store = store_with(
        r#"[{"kind":"swimming","coords":[39,-12],"distance":1,"duration":30},
            {"kind":"running","coords":[39,-12],"distance":5.2,"duration":24,"cadence":178}]"#,
    );
    let (session, _log) = restore_session(store);
    assert_eq!(session.workouts().len(), 1);
    assert_eq!(session.workouts()[0].kind(), WorkoutKind::Running);
}

#[test]
fn test_non_list_snapshot_restores_empty() {
    let (session, _log) = restore_session(store_with(r#"{"kind":"running"}"#));
    assert!(session.workouts().is_empty());
}

#[test]
fn test_broken_map_degrades_to_mapless() {
    let store = store_with(
        r#"[{"kind":"running","coords":[39,-12],"distance":5.2,"duration":24,"cadence":178}]"#,
    );
    let (mut session, log) = restore_session_with_broken_map(store);

    session.on_position_resolved(home());

    assert_eq!(session.map_status(), MapStatus::Unavailable);
    assert!(log
        .borrow()
        .contains(&Call::Notice("Could not load the map".to_string())));

    // Browsing still works, without panning
    let id = session.workouts()[0].id().clone();
    assert!(session.on_list_entry_selected(&id));
    assert_eq!(session.workouts()[0].clicks(), 1);
    assert!(!log.borrow().iter().any(|c| matches!(c, Call::Recenter(..))));
}
