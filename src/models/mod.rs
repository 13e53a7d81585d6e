// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod form;
pub mod snapshot;
pub mod workout;

pub use form::WorkoutForm;
pub use snapshot::WorkoutSnapshot;
pub use workout::{Coordinates, WorkoutDetail, WorkoutId, WorkoutKind, WorkoutRecord};
