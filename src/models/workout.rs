// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout record model with derived metrics.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};

/// A point on the map, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Build a coordinate pair, rejecting values outside geographic bounds.
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::Validation(format!(
                "latitude {lat} outside [-90, 90]"
            )));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(AppError::Validation(format!(
                "longitude {lng} outside [-180, 180]"
            )));
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// `[lat, lng]`, the persisted representation.
    pub fn to_array(self) -> [f64; 2] {
        [self.lat, self.lng]
    }

    /// Link to the same spot on Google Maps, handy in logs.
    pub fn google_maps_url(&self) -> String {
        format!("https://www.google.com/maps/@{},{}", self.lat, self.lng)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// Activity discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Capitalized name used in descriptions.
    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    /// Lowercase discriminant as persisted.
    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♀️",
        }
    }

    /// Style class for the marker popup.
    pub fn popup_class(self) -> String {
        format!("{}-popup", self.as_str())
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WorkoutKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            other => Err(AppError::Validation(format!("unknown workout kind {other:?}"))),
        }
    }
}

/// Opaque workout identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for WorkoutId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for WorkoutId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind-specific measured input and the metric derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutDetail {
    Running {
        cadence_spm: u32,
        /// min/km
        pace_min_per_km: f64,
    },
    Cycling {
        elevation_gain_m: f64,
        /// km/h
        speed_km_per_h: f64,
    },
}

impl WorkoutDetail {
    fn running(distance_km: f64, duration_min: f64, cadence_spm: u32) -> Self {
        WorkoutDetail::Running {
            cadence_spm,
            pace_min_per_km: duration_min / distance_km,
        }
    }

    fn cycling(distance_km: f64, duration_min: f64, elevation_gain_m: f64) -> Self {
        WorkoutDetail::Cycling {
            elevation_gain_m,
            speed_km_per_h: distance_km / (duration_min / 60.0),
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutDetail::Running { .. } => WorkoutKind::Running,
            WorkoutDetail::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// One logged workout.
///
/// Everything except the click counter is fixed at construction; derived
/// values are computed here and nowhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    coords: Coordinates,
    distance_km: f64,
    duration_min: f64,
    clicks: u32,
    description: String,
    detail: WorkoutDetail,
}

impl WorkoutRecord {
    /// Create a running workout with a fresh id, stamped now.
    pub fn running(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: u32,
    ) -> Result<Self> {
        Self::running_at(
            WorkoutId::generate(),
            Utc::now(),
            coords,
            distance_km,
            duration_min,
            cadence_spm,
        )
    }

    /// Create a cycling workout with a fresh id, stamped now.
    pub fn cycling(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Result<Self> {
        Self::cycling_at(
            WorkoutId::generate(),
            Utc::now(),
            coords,
            distance_km,
            duration_min,
            elevation_gain_m,
        )
    }

    pub fn running_at(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: u32,
    ) -> Result<Self> {
        check_base(distance_km, duration_min)?;
        if cadence_spm == 0 {
            return Err(AppError::Validation("cadence must be positive".to_string()));
        }
        let detail = WorkoutDetail::running(distance_km, duration_min, cadence_spm);
        Ok(Self::assemble(
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            detail,
        ))
    }

    /// Elevation gain may be zero or negative (net descent).
    pub fn cycling_at(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Result<Self> {
        check_base(distance_km, duration_min)?;
        if !elevation_gain_m.is_finite() {
            return Err(AppError::Validation(
                "elevation gain must be a finite number".to_string(),
            ));
        }
        let detail = WorkoutDetail::cycling(distance_km, duration_min, elevation_gain_m);
        Ok(Self::assemble(
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            detail,
        ))
    }

    fn assemble(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        detail: WorkoutDetail,
    ) -> Self {
        Self {
            description: describe(detail.kind(), created_at),
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            clicks: 0,
            detail,
        }
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coordinates {
        self.coords
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn detail(&self) -> &WorkoutDetail {
        &self.detail
    }

    pub fn kind(&self) -> WorkoutKind {
        self.detail.kind()
    }

    /// Pace (running) or speed (cycling).
    pub fn derived_metric(&self) -> f64 {
        match self.detail {
            WorkoutDetail::Running {
                pace_min_per_km, ..
            } => pace_min_per_km,
            WorkoutDetail::Cycling { speed_km_per_h, .. } => speed_km_per_h,
        }
    }

    /// Text shown in the marker popup.
    pub fn popup_content(&self) -> String {
        format!("{} {}", self.kind().icon(), self.description)
    }

    pub(crate) fn register_click(&mut self) {
        self.clicks = self.clicks.saturating_add(1);
    }

    pub(crate) fn with_clicks(mut self, clicks: u32) -> Self {
        self.clicks = clicks;
        self
    }
}

fn check_base(distance_km: f64, duration_min: f64) -> Result<()> {
    if !distance_km.is_finite() || distance_km <= 0.0 {
        return Err(AppError::Validation(format!(
            "distance must be a positive number, got {distance_km}"
        )));
    }
    if !duration_min.is_finite() || duration_min <= 0.0 {
        return Err(AppError::Validation(format!(
            "duration must be a positive number, got {duration_min}"
        )));
    }
    Ok(())
}

/// "Running on April 14"
fn describe(kind: WorkoutKind, created_at: DateTime<Utc>) -> String {
    format!("{} on {}", kind.label(), created_at.format("%B %-d"))
}
