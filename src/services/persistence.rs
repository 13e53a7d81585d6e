// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout snapshot persistence.
//!
//! The whole list is written under a single key on every change; there are
//! no incremental updates. Anything unreadable on load counts as "nothing
//! saved" so a damaged store never blocks a session.

use crate::db::KeyValueStore;
use crate::error::Result;
use crate::models::{WorkoutRecord, WorkoutSnapshot};

/// Saves and loads the workout list through a key-value store.
#[derive(Debug, Clone)]
pub struct WorkoutRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> WorkoutRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the stored snapshot with `workouts`, in order.
    pub fn save(&self, workouts: &[WorkoutRecord]) -> Result<()> {
        let snapshots: Vec<WorkoutSnapshot> = workouts.iter().map(WorkoutSnapshot::from).collect();
        let json = serde_json::to_string(&snapshots)?;
        self.store.set(&self.key, &json)?;
        tracing::debug!(key = %self.key, count = snapshots.len(), "Saved workouts");
        Ok(())
    }

    /// Load the stored snapshot.
    ///
    /// Returns `None` when nothing is stored, the store cannot be read, or
    /// the stored value is not a JSON list. Malformed entries inside an
    /// otherwise readable list are dropped.
    pub fn load(&self) -> Option<Vec<WorkoutSnapshot>> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "No saved workouts");
                return None;
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Could not read saved workouts");
                return None;
            }
        };

        match serde_json::from_str::<Option<Vec<serde_json::Value>>>(&raw) {
            Ok(Some(entries)) => {
                let total = entries.len();
                let snapshots: Vec<WorkoutSnapshot> = entries
                    .into_iter()
                    .enumerate()
                    .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                        Ok(snapshot) => Some(snapshot),
                        Err(e) => {
                            tracing::warn!(index, error = %e, "Skipping malformed saved workout");
                            None
                        }
                    })
                    .collect();
                tracing::debug!(key = %self.key, count = snapshots.len(), total, "Loaded workouts");
                Some(snapshots)
            }
            // A literal `null` is what JSON.parse of a missing item gives back
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Discarding unreadable saved workouts");
                None
            }
        }
    }

    /// Remove the stored snapshot.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(&self.key)?;
        tracing::info!(key = %self.key, "Cleared saved workouts");
        Ok(())
    }
}
