// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map surface contract.
//!
//! The session never talks to a tile renderer directly. Clicks on the map
//! arrive as [`SessionEvent::LocationSelected`](crate::session::SessionEvent)
//! and readiness as `MapReady`/`MapFailed`.

use crate::config::Config;
use crate::error::Result;
use crate::models::{Coordinates, WorkoutRecord};

/// Initial view and tile source.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub center: Coordinates,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

impl MapOptions {
    pub fn from_config(config: &Config, center: Coordinates) -> Self {
        Self {
            center,
            zoom: config.map_zoom,
            tile_url: config.tile_url.clone(),
            attribution: config.tile_attribution.clone(),
        }
    }
}

/// Popup attached to a workout marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPopup {
    pub content: String,
    pub class_name: String,
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl MarkerPopup {
    /// Sticky popup styled after the workout kind.
    pub fn for_workout(workout: &WorkoutRecord) -> Self {
        Self {
            content: workout.popup_content(),
            class_name: workout.kind().popup_class(),
            max_width: 250,
            min_width: 100,
            auto_close: false,
            close_on_click: false,
        }
    }
}

/// How the map moves when recentering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanOptions {
    pub animate: bool,
    pub duration_secs: f64,
}

impl PanOptions {
    pub fn animated(duration_secs: f64) -> Self {
        Self {
            animate: true,
            duration_secs,
        }
    }
}

/// Capabilities the session needs from an interactive map.
pub trait MapSurface {
    /// Start building the map. Completion is reported separately as a
    /// map-ready event; an error here means the map will never be ready.
    fn initialize(&mut self, options: &MapOptions) -> Result<()>;

    /// Add a marker with an open popup.
    fn place_marker(&mut self, coords: Coordinates, popup: &MarkerPopup);

    /// Move the view to `coords`.
    fn recenter(&mut self, coords: Coordinates, zoom: u8, pan: &PanOptions);
}
