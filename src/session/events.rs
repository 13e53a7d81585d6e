// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Events delivered to a session by its surroundings.

use crate::models::{Coordinates, WorkoutForm, WorkoutId, WorkoutKind};

/// Everything that can happen to a session, one handler run per event.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The geolocation request returned a position.
    PositionResolved(Coordinates),
    /// The geolocation request was denied or is unsupported.
    PositionFailed(String),
    /// The map finished loading.
    MapReady,
    /// The map could not be loaded.
    MapFailed(String),
    /// The user clicked the map.
    LocationSelected(Coordinates),
    /// The kind selector on the form changed.
    KindChanged(WorkoutKind),
    FormSubmitted(WorkoutForm),
    FormCancelled,
    /// The user clicked a list entry.
    EntrySelected(WorkoutId),
    /// Wipe saved and in-memory workouts.
    Reset,
}
