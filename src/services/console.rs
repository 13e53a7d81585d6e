// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Terminal stand-ins for the map and the page, used by the `mapty` binary.

use std::io::Write;
use std::time::Duration;

use crate::error::{AppError, Result};
use crate::models::{Coordinates, WorkoutKind, WorkoutRecord};
use crate::services::map::{MapOptions, MapSurface, MarkerPopup, PanOptions};
use crate::services::render::{entry_fields, Renderer};

/// Map surface that prints what a real map would draw.
pub struct ConsoleMap<W> {
    out: W,
    view: Option<(Coordinates, u8)>,
    markers: usize,
}

impl<W: Write> ConsoleMap<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            view: None,
            markers: 0,
        }
    }

    /// Current center and zoom, once initialized.
    pub fn view(&self) -> Option<(Coordinates, u8)> {
        self.view
    }

    pub fn marker_count(&self) -> usize {
        self.markers
    }
}

impl<W: Write> MapSurface for ConsoleMap<W> {
    fn initialize(&mut self, options: &MapOptions) -> Result<()> {
        let has_placeholders = ["{z}", "{x}", "{y}"]
            .iter()
            .all(|p| options.tile_url.contains(p));
        if !has_placeholders {
            tracing::error!(tile_url = %options.tile_url, "Tile URL lacks {{z}}/{{x}}/{{y}}");
            return Err(AppError::MapUnavailable);
        }

        self.view = Some((options.center, options.zoom));
        let _ = writeln!(
            self.out,
            "[map] centered on {} at zoom {} ({})",
            options.center, options.zoom, options.tile_url
        );
        Ok(())
    }

    fn place_marker(&mut self, coords: Coordinates, popup: &MarkerPopup) {
        self.markers += 1;
        let _ = writeln!(
            self.out,
            "[map] marker at {coords} <{}> {}",
            popup.class_name, popup.content
        );
    }

    fn recenter(&mut self, coords: Coordinates, zoom: u8, pan: &PanOptions) {
        self.view = Some((coords, zoom));
        let _ = writeln!(
            self.out,
            "[map] panning to {coords} at zoom {zoom} over {:.1}s",
            if pan.animate { pan.duration_secs } else { 0.0 }
        );
    }
}

/// Renderer that prints the list and form changes.
pub struct ConsoleRenderer<W> {
    out: W,
    form_visible: bool,
    kind_field: WorkoutKind,
    reload_requested: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            form_visible: false,
            kind_field: WorkoutKind::Running,
            reload_requested: false,
        }
    }

    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    /// Whether a reset asked for a fresh start.
    pub fn reload_requested(&self) -> bool {
        self.reload_requested
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn append_workout_entry(&mut self, workout: &WorkoutRecord) {
        let details: Vec<String> = entry_fields(workout)
            .into_iter()
            .map(|f| format!("{} {} {}", f.icon, f.value, f.unit))
            .collect();
        let _ = writeln!(
            self.out,
            "[list] {} [{}] {}",
            workout.description(),
            workout.id(),
            details.join("  ")
        );
    }

    fn show_form(&mut self) {
        self.form_visible = true;
        let field = match self.kind_field {
            WorkoutKind::Running => "cadence",
            WorkoutKind::Cycling => "elevation",
        };
        let _ = writeln!(
            self.out,
            "[form] enter distance, duration and {field} (focus: distance)"
        );
    }

    fn hide_form(&mut self, reset_delay: Duration) {
        self.form_visible = false;
        tracing::trace!(delay_ms = reset_delay.as_millis() as u64, "Form hidden");
    }

    fn clear_form(&mut self) {
        tracing::trace!("Form cleared");
    }

    fn toggle_kind_field(&mut self, kind: WorkoutKind) {
        self.kind_field = kind;
        let _ = writeln!(self.out, "[form] switched to {kind}");
    }

    fn show_notice(&mut self, message: &str) {
        let _ = writeln!(self.out, "[notice] {message}");
    }

    fn reload(&mut self) {
        self.reload_requested = true;
        let _ = writeln!(self.out, "[page] reloading");
    }
}
