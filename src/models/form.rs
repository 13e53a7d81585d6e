// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout form input and its validation rules.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::error::Result;
use crate::models::snapshot::cadence_from_input;
use crate::models::workout::{Coordinates, WorkoutKind, WorkoutRecord};

/// Values submitted from the workout form.
///
/// `kind_input` is cadence (steps/min) for running and elevation gain (m)
/// for cycling; only the field matching `kind` is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Validate)]
#[validate(schema(function = "validate_kind_input"))]
pub struct WorkoutForm {
    pub kind: WorkoutKind,
    #[validate(custom(function = "validate_finite"), range(exclusive_min = 0.0))]
    pub distance: f64,
    #[validate(custom(function = "validate_finite"), range(exclusive_min = 0.0))]
    pub duration: f64,
    #[validate(custom(function = "validate_finite"))]
    pub kind_input: f64,
}

impl WorkoutForm {
    pub fn running(distance: f64, duration: f64, cadence: f64) -> Self {
        Self {
            kind: WorkoutKind::Running,
            distance,
            duration,
            kind_input: cadence,
        }
    }

    pub fn cycling(distance: f64, duration: f64, elevation_gain: f64) -> Self {
        Self {
            kind: WorkoutKind::Cycling,
            distance,
            duration,
            kind_input: elevation_gain,
        }
    }

    /// Validate the form and build the record at `coords`.
    pub fn into_record(self, coords: Coordinates) -> Result<WorkoutRecord> {
        self.validate()?;
        match self.kind {
            WorkoutKind::Running => WorkoutRecord::running(
                coords,
                self.distance,
                self.duration,
                cadence_from_input(self.kind_input)?,
            ),
            WorkoutKind::Cycling => {
                WorkoutRecord::cycling(coords, self.distance, self.duration, self.kind_input)
            }
        }
    }
}

fn validate_finite(value: f64) -> std::result::Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite").with_message(Cow::Borrowed("must be a number")))
    }
}

/// Cadence must be a positive whole number; elevation may be anything finite.
fn validate_kind_input(form: &WorkoutForm) -> std::result::Result<(), ValidationError> {
    match form.kind {
        WorkoutKind::Running if form.kind_input <= 0.0 || form.kind_input.fract() != 0.0 => Err(
            ValidationError::new("cadence")
                .with_message(Cow::Borrowed("cadence must be a positive whole number")),
        ),
        _ => Ok(()),
    }
}
