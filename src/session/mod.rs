// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session controller.
//!
//! Owns the workout list and sequences every user interaction:
//! 1. Restore saved workouts and list them
//! 2. Locate the user and load the map, then mark restored workouts
//! 3. Map click opens the form for that location
//! 4. Form submit validates, records, marks, lists and saves the workout
//! 5. List click pans the map to the workout
//!
//! Handlers take `&mut self` and run to completion one event at a time.

pub mod events;
pub mod state;

pub use events::SessionEvent;
pub use state::{MapStatus, SessionState};

use crate::config::Config;
use crate::db::KeyValueStore;
use crate::error::{AppError, Result};
use crate::models::{Coordinates, WorkoutForm, WorkoutId, WorkoutKind, WorkoutRecord};
use crate::services::geolocation::Geolocator;
use crate::services::map::{MapOptions, MapSurface, MarkerPopup, PanOptions};
use crate::services::persistence::WorkoutRepository;
use crate::services::render::Renderer;

/// One user session: the workout list plus its map, page and storage.
pub struct Session<M, R, S> {
    config: Config,
    map: M,
    renderer: R,
    repository: WorkoutRepository<S>,
    workouts: Vec<WorkoutRecord>,
    state: SessionState,
    map_status: MapStatus,
}

impl<M, R, S> Session<M, R, S>
where
    M: MapSurface,
    R: Renderer,
    S: KeyValueStore,
{
    /// Start a session from whatever was saved in `store`.
    ///
    /// Saved workouts are rebuilt with freshly computed metrics and listed
    /// right away. Their markers wait for [`Session::on_map_ready`].
    pub fn restore(config: Config, map: M, mut renderer: R, store: S) -> Self {
        let repository = WorkoutRepository::new(store, config.storage_key.clone());

        let workouts: Vec<WorkoutRecord> = match repository.load() {
            Some(snapshots) => {
                let total = snapshots.len();
                let workouts: Vec<WorkoutRecord> = snapshots
                    .into_iter()
                    .enumerate()
                    .filter_map(|(index, snapshot)| match WorkoutRecord::try_from(snapshot) {
                        Ok(workout) => Some(workout),
                        Err(e) => {
                            tracing::warn!(index, error = %e, "Skipping unreadable saved workout");
                            None
                        }
                    })
                    .collect();
                tracing::info!(restored = workouts.len(), total, "Restored saved workouts");
                workouts
            }
            None => Vec::new(),
        };

        for workout in &workouts {
            renderer.append_workout_entry(workout);
        }

        Self {
            config,
            map,
            renderer,
            repository,
            workouts,
            state: SessionState::Idle,
            map_status: MapStatus::Loading,
        }
    }

    // ─── Accessors ───────────────────────────────────────────────

    /// Workouts in creation order.
    pub fn workouts(&self) -> &[WorkoutRecord] {
        &self.workouts
    }

    pub fn workout(&self, id: &WorkoutId) -> Option<&WorkoutRecord> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn map_status(&self) -> MapStatus {
        self.map_status
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn repository(&self) -> &WorkoutRepository<S> {
        &self.repository
    }

    // ─── Startup ─────────────────────────────────────────────────

    /// Ask `geolocator` for the user's position once and load the map there.
    pub async fn locate<G: Geolocator>(&mut self, geolocator: &G) {
        match geolocator.current_position().await {
            Ok(coords) => self.on_position_resolved(coords),
            Err(e) => self.on_position_failed(e),
        }
    }

    pub fn on_position_resolved(&mut self, coords: Coordinates) {
        tracing::info!(
            lat = coords.lat(),
            lng = coords.lng(),
            url = %coords.google_maps_url(),
            "Position resolved"
        );

        let options = MapOptions::from_config(&self.config, coords);
        if let Err(e) = self.map.initialize(&options) {
            self.on_map_failed(&e.to_string());
        }
    }

    pub fn on_position_failed(&mut self, error: AppError) {
        tracing::warn!(error = %error, "Could not get position, continuing without map");
        self.map_status = MapStatus::Unavailable;
        self.renderer.show_notice(AppError::NO_POSITION_NOTICE);
    }

    /// Map finished loading: place markers for every workout restored so far.
    pub fn on_map_ready(&mut self) {
        if self.map_status == MapStatus::Ready {
            tracing::debug!("Ignoring repeated map-ready signal");
            return;
        }
        self.map_status = MapStatus::Ready;

        for workout in &self.workouts {
            self.map
                .place_marker(workout.coords(), &MarkerPopup::for_workout(workout));
        }
        tracing::info!(markers = self.workouts.len(), "Map ready");
    }

    pub fn on_map_failed(&mut self, reason: &str) {
        tracing::error!(reason, "Map failed to load, continuing without map");
        self.map_status = MapStatus::Unavailable;
        self.renderer.show_notice("Could not load the map");
    }

    // ─── Workout creation ────────────────────────────────────────

    /// Map click at raw `lat`/`lng`.
    pub fn on_map_clicked(&mut self, lat: f64, lng: f64) -> Result<()> {
        let coords = Coordinates::new(lat, lng)?;
        self.on_map_location_selected(coords)
    }

    /// Open the form for `coords`. A new click while the form is open
    /// replaces the pending location.
    pub fn on_map_location_selected(&mut self, coords: Coordinates) -> Result<()> {
        if self.map_status != MapStatus::Ready {
            tracing::debug!(status = ?self.map_status, "Location selected without a ready map");
            return Err(AppError::MapUnavailable);
        }

        if let Some(previous) = self.state.pending() {
            tracing::debug!(%previous, %coords, "Replacing pending location");
        }
        self.state = SessionState::AwaitingFormInput { pending: coords };
        self.renderer.show_form();
        Ok(())
    }

    pub fn on_kind_changed(&mut self, kind: WorkoutKind) {
        self.renderer.toggle_kind_field(kind);
    }

    /// Turn the submitted form into a workout at the pending location.
    ///
    /// Invalid input leaves the session untouched with the form still open.
    /// A failed save is logged; the workout stays in the session.
    pub fn on_form_submitted(&mut self, form: WorkoutForm) -> Result<WorkoutId> {
        let Some(pending) = self.state.pending() else {
            tracing::debug!("Form submitted without a pending location");
            return Err(AppError::NoPendingLocation);
        };

        let workout = match form.into_record(pending) {
            Ok(workout) => workout,
            Err(e) => {
                tracing::info!(error = %e, kind = %form.kind, "Rejected workout form");
                self.renderer.show_notice(AppError::INVALID_INPUT_NOTICE);
                return Err(e);
            }
        };

        let id = workout.id().clone();
        tracing::info!(
            id = %id,
            kind = %workout.kind(),
            distance_km = workout.distance_km(),
            duration_min = workout.duration_min(),
            metric = workout.derived_metric(),
            "Workout created"
        );

        self.workouts.push(workout);
        self.state = SessionState::Idle;

        self.renderer.clear_form();
        self.renderer.hide_form(self.config.form_reset_delay);

        if let Some(workout) = self.workouts.last() {
            if self.map_status == MapStatus::Ready {
                self.map
                    .place_marker(workout.coords(), &MarkerPopup::for_workout(workout));
            }
            self.renderer.append_workout_entry(workout);
        }

        // Must stay after the marker and list updates
        self.persist();

        Ok(id)
    }

    pub fn on_form_cancelled(&mut self) {
        self.state = SessionState::Idle;
        self.renderer.clear_form();
        self.renderer.hide_form(self.config.form_reset_delay);
    }

    // ─── Browsing ────────────────────────────────────────────────

    /// Pan to the selected workout and count the click.
    ///
    /// Returns `false` when the id is unknown, which is otherwise ignored.
    pub fn on_list_entry_selected(&mut self, id: &WorkoutId) -> bool {
        let ready = self.map_status == MapStatus::Ready;
        let zoom = self.config.map_zoom;
        let pan = PanOptions::animated(self.config.pan_duration_secs);

        let workout = match self.find_mut(id) {
            Ok(workout) => workout,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring list selection");
                return false;
            }
        };

        workout.register_click();
        let coords = workout.coords();
        tracing::debug!(id = %id, clicks = workout.clicks(), "Workout selected");

        if ready {
            self.map.recenter(coords, zoom, &pan);
        }
        true
    }

    /// Forget every workout, saved and in memory, and start over.
    pub fn reset(&mut self) {
        if let Err(e) = self.repository.clear() {
            tracing::warn!(error = %e, "Could not clear saved workouts");
        }
        let discarded = self.workouts.len();
        self.workouts.clear();
        self.state = SessionState::Idle;
        tracing::info!(discarded, "Session reset");
        self.renderer.reload();
    }

    // ─── Dispatch ────────────────────────────────────────────────

    /// Route one event to its handler.
    pub fn handle(&mut self, event: SessionEvent) {
        let outcome = match event {
            SessionEvent::PositionResolved(coords) => {
                self.on_position_resolved(coords);
                Ok(())
            }
            SessionEvent::PositionFailed(reason) => {
                self.on_position_failed(AppError::SensorUnavailable(reason));
                Ok(())
            }
            SessionEvent::MapReady => {
                self.on_map_ready();
                Ok(())
            }
            SessionEvent::MapFailed(reason) => {
                self.on_map_failed(&reason);
                Ok(())
            }
            SessionEvent::LocationSelected(coords) => self.on_map_location_selected(coords),
            SessionEvent::KindChanged(kind) => {
                self.on_kind_changed(kind);
                Ok(())
            }
            SessionEvent::FormSubmitted(form) => self.on_form_submitted(form).map(|_| ()),
            SessionEvent::FormCancelled => {
                self.on_form_cancelled();
                Ok(())
            }
            SessionEvent::EntrySelected(id) => {
                self.on_list_entry_selected(&id);
                Ok(())
            }
            SessionEvent::Reset => {
                self.reset();
                Ok(())
            }
        };

        // Handlers already surfaced anything the user needs to see
        if let Err(e) = outcome {
            tracing::debug!(error = %e, user_visible = e.is_user_visible(), "Event not applied");
        }
    }

    fn find_mut(&mut self, id: &WorkoutId) -> Result<&mut WorkoutRecord> {
        self.workouts
            .iter_mut()
            .find(|w| w.id() == id)
            .ok_or_else(|| AppError::StaleReference(id.to_string()))
    }

    fn persist(&self) {
        if let Err(e) = self.repository.save(&self.workouts) {
            tracing::warn!(error = %e, count = self.workouts.len(), "Could not save workouts");
        }
    }
}
