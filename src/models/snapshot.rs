// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persisted form of a workout and rehydration back into a record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::models::workout::{Coordinates, WorkoutDetail, WorkoutId, WorkoutKind, WorkoutRecord};

/// One entry of the persisted workout list.
///
/// Everything except the kind, the position and the measured inputs is
/// optional so older or hand-edited snapshots still load: an odd `id`, `date`
/// or `clicks` value falls back to its default instead of dropping the entry.
/// `pace`, `speed` and `description` are written for readability only and are
/// never trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSnapshot {
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Creation time (RFC 3339)
    #[serde(
        default,
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_clicks")]
    pub clicks: u32,
    /// `[lat, lng]`
    pub coords: [f64; 2],
    #[serde(alias = "type")]
    pub kind: WorkoutKind,
    /// km
    pub distance: f64,
    /// min
    pub duration: f64,
    /// steps/min (running)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence: Option<f64>,
    /// m (cycling)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Ids were once written as numbers; anything else becomes "no id".
fn lenient_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(id)) => Some(id),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(date)) => DateTime::parse_from_rfc3339(&date)
            .ok()
            .map(|date| date.with_timezone(&Utc)),
        _ => None,
    })
}

/// Whole non-negative numbers (including `2.0`) are kept; anything else is 0.
fn lenient_clicks<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<u32, D::Error> {
    let clicks = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|clicks| u32::try_from(clicks).ok())
            .or_else(|| {
                n.as_f64()
                    .filter(|c| c.fract() == 0.0 && *c >= 0.0 && *c <= f64::from(u32::MAX))
                    .map(|c| c as u32)
            }),
        _ => None,
    };
    Ok(clicks.unwrap_or(0))
}

impl From<&WorkoutRecord> for WorkoutSnapshot {
    fn from(record: &WorkoutRecord) -> Self {
        let (cadence, elevation_gain, pace, speed) = match *record.detail() {
            WorkoutDetail::Running {
                cadence_spm,
                pace_min_per_km,
            } => (Some(f64::from(cadence_spm)), None, Some(pace_min_per_km), None),
            WorkoutDetail::Cycling {
                elevation_gain_m,
                speed_km_per_h,
            } => (None, Some(elevation_gain_m), None, Some(speed_km_per_h)),
        };

        Self {
            id: Some(record.id().to_string()),
            date: Some(record.created_at()),
            clicks: record.clicks(),
            coords: record.coords().to_array(),
            kind: record.kind(),
            distance: record.distance_km(),
            duration: record.duration_min(),
            cadence,
            elevation_gain,
            pace,
            speed,
            description: Some(record.description().to_string()),
        }
    }
}

impl TryFrom<WorkoutSnapshot> for WorkoutRecord {
    type Error = AppError;

    /// Rebuild a typed record, recomputing pace/speed and the description.
    fn try_from(snapshot: WorkoutSnapshot) -> Result<Self> {
        let id = snapshot
            .id
            .filter(|id| !id.trim().is_empty())
            .map(WorkoutId::from)
            .unwrap_or_else(WorkoutId::generate);
        let created_at = snapshot.date.unwrap_or_else(Utc::now);
        let [lat, lng] = snapshot.coords;
        let coords = Coordinates::new(lat, lng)?;

        let record = match snapshot.kind {
            WorkoutKind::Running => {
                let cadence = snapshot
                    .cadence
                    .ok_or_else(|| AppError::Validation("running entry without cadence".into()))?;
                WorkoutRecord::running_at(
                    id,
                    created_at,
                    coords,
                    snapshot.distance,
                    snapshot.duration,
                    cadence_from_input(cadence)?,
                )?
            }
            WorkoutKind::Cycling => {
                let elevation = snapshot.elevation_gain.ok_or_else(|| {
                    AppError::Validation("cycling entry without elevation gain".into())
                })?;
                WorkoutRecord::cycling_at(
                    id,
                    created_at,
                    coords,
                    snapshot.distance,
                    snapshot.duration,
                    elevation,
                )?
            }
        };

        Ok(record.with_clicks(snapshot.clicks))
    }
}

/// Convert a numeric cadence input into whole steps per minute.
pub(crate) fn cadence_from_input(value: f64) -> Result<u32> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::Validation(format!(
            "cadence must be a positive number, got {value}"
        )));
    }
    if value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(AppError::Validation(format!(
            "cadence must be a whole number of steps, got {value}"
        )));
    }
    Ok(value as u32)
}
