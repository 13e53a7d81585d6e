// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Saving and restoring workout lists through real stores.

use mapty::db::{keys, FileStore, KeyValueStore, MemoryStore};
use mapty::models::{Coordinates, WorkoutRecord};
use mapty::services::WorkoutRepository;

mod common;
use common::restore_session;

/// Alternating runs and rides spread over the globe.
fn mixed_workouts(count: usize) -> Vec<WorkoutRecord> {
    (0..count)
        .map(|i| {
            let coords =
                Coordinates::new(-80.0 + (i % 160) as f64, -170.0 + (i % 340) as f64).unwrap();
            let distance = 1.0 + i as f64 * 0.7;
            let duration = 10.0 + i as f64 * 1.3;
            if i % 2 == 0 {
                WorkoutRecord::running(coords, distance, duration, 150 + i as u32).unwrap()
            } else {
                WorkoutRecord::cycling(coords, distance, duration, i as f64 * 10.0 - 300.0)
                    .unwrap()
            }
        })
        .collect()
}

fn rehydrate<S: KeyValueStore>(repo: &WorkoutRepository<S>) -> Vec<WorkoutRecord> {
    repo.load()
        .expect("snapshot present")
        .into_iter()
        .map(|s| WorkoutRecord::try_from(s).expect("snapshot entry should rehydrate"))
        .collect()
}

fn assert_same(original: &[WorkoutRecord], restored: &[WorkoutRecord]) {
    assert_eq!(original.len(), restored.len());
    for (a, b) in original.iter().zip(restored) {
        assert_eq!(a.id(), b.id());
        assert_eq!(a.kind(), b.kind());
        assert_eq!(a.coords(), b.coords());
        assert_eq!(a.derived_metric(), b.derived_metric());
        assert_eq!(a.description(), b.description());
        assert_eq!(a.detail(), b.detail());
    }
}

#[test]
fn test_round_trip_mixed_collection() {
    let repo = WorkoutRepository::new(MemoryStore::new(), keys::WORKOUTS);
    let workouts = mixed_workouts(6);

    repo.save(&workouts).unwrap();

    assert_same(&workouts, &rehydrate(&repo));
}

#[test]
fn test_round_trip_empty_collection() {
    let repo = WorkoutRepository::new(MemoryStore::new(), keys::WORKOUTS);
    repo.save(&[]).unwrap();
    assert!(rehydrate(&repo).is_empty());
}

#[test]
fn test_round_trip_large_collection() {
    let repo = WorkoutRepository::new(MemoryStore::new(), keys::WORKOUTS);
    let workouts = mixed_workouts(150);

    repo.save(&workouts).unwrap();

    assert_same(&workouts, &rehydrate(&repo));
}

#[test]
fn test_save_is_idempotent() {
    let repo = WorkoutRepository::new(MemoryStore::new(), keys::WORKOUTS);
    let workouts = mixed_workouts(4);

    repo.save(&workouts).unwrap();
    let first = repo.store().get(keys::WORKOUTS).unwrap();
    repo.save(&workouts).unwrap();
    let second = repo.store().get(keys::WORKOUTS).unwrap();

    assert_eq!(first, second);
    assert_same(&workouts, &rehydrate(&repo));
}

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let workouts = mixed_workouts(10);

    {
        let repo = WorkoutRepository::new(FileStore::open(dir.path()).unwrap(), keys::WORKOUTS);
        repo.save(&workouts).unwrap();
    }

    // Reopen as a later run would
    let repo = WorkoutRepository::new(FileStore::open(dir.path()).unwrap(), keys::WORKOUTS);
    assert_same(&workouts, &rehydrate(&repo));
}

#[test]
fn test_session_restores_what_it_saved() {
    let store = MemoryStore::new();
    let workouts = mixed_workouts(5);
    WorkoutRepository::new(store.clone(), keys::WORKOUTS)
        .save(&workouts)
        .unwrap();

    let (session, log) = restore_session(store);

    assert_same(&workouts, session.workouts());
    assert_eq!(log.borrow().len(), 5);
}
