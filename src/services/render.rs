// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rendering surface contract and list entry formatting.

use std::time::Duration;

use crate::models::{WorkoutDetail, WorkoutKind, WorkoutRecord};

/// Capabilities the session needs from the page: the workout list, the
/// input form and user notices.
pub trait Renderer {
    /// Append one entry to the workout list, tagged with the workout id.
    fn append_workout_entry(&mut self, workout: &WorkoutRecord);

    /// Show the form and focus the distance input.
    fn show_form(&mut self);

    /// Hide the form. The form restores its display mode after `reset_delay`.
    fn hide_form(&mut self, reset_delay: Duration);

    /// Empty every input of the form.
    fn clear_form(&mut self);

    /// Show the cadence field for running or the elevation field for cycling.
    fn toggle_kind_field(&mut self, kind: WorkoutKind);

    /// Blocking notice, e.g. rejected input or missing position.
    fn show_notice(&mut self, message: &str);

    /// Ask the surrounding environment to start over from scratch.
    fn reload(&mut self);
}

/// One labelled value of a list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryField {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl EntryField {
    fn new(icon: &'static str, value: String, unit: &'static str) -> Self {
        Self { icon, value, unit }
    }
}

/// Values shown for a workout in the list, in display order.
pub fn entry_fields(workout: &WorkoutRecord) -> Vec<EntryField> {
    let mut fields = vec![
        EntryField::new(
            workout.kind().icon(),
            workout.distance_km().to_string(),
            "km",
        ),
        EntryField::new("⏱", workout.duration_min().to_string(), "min"),
    ];

    match *workout.detail() {
        WorkoutDetail::Running {
            cadence_spm,
            pace_min_per_km,
        } => {
            fields.push(EntryField::new("⚡️", format!("{pace_min_per_km:.1}"), "min/km"));
            fields.push(EntryField::new("🦶🏼", cadence_spm.to_string(), "spm"));
        }
        WorkoutDetail::Cycling {
            elevation_gain_m,
            speed_km_per_h,
        } => {
            fields.push(EntryField::new("⚡️", format!("{speed_km_per_h:.2}"), "km/h"));
            fields.push(EntryField::new("⛰", elevation_gain_m.to_string(), "m"));
        }
    }

    fields
}
