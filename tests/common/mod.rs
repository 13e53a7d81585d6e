// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use mapty::config::Config;
use mapty::db::{KeyValueStore, MemoryStore};
use mapty::error::Result;
use mapty::models::{Coordinates, WorkoutKind, WorkoutRecord};
use mapty::services::{MapOptions, MapSurface, MarkerPopup, PanOptions, Renderer};
use mapty::Session;

/// Everything the session asked its collaborators to do, in order.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum Call {
    MapInitialized(Coordinates, u8),
    Marker(Coordinates, String, String),
    Recenter(Coordinates, u8, bool),
    Entry(String),
    ShowForm,
    HideForm(Duration),
    ClearForm,
    ToggleKind(WorkoutKind),
    Notice(String),
    Reload,
    Saved(String),
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

/// Map fake recording into a shared log.
pub struct RecordingMap {
    log: CallLog,
    fail_init: bool,
}

impl MapSurface for RecordingMap {
    fn initialize(&mut self, options: &MapOptions) -> Result<()> {
        if self.fail_init {
            return Err(mapty::error::AppError::MapUnavailable);
        }
        self.log
            .borrow_mut()
            .push(Call::MapInitialized(options.center, options.zoom));
        Ok(())
    }

    fn place_marker(&mut self, coords: Coordinates, popup: &MarkerPopup) {
        self.log.borrow_mut().push(Call::Marker(
            coords,
            popup.content.clone(),
            popup.class_name.clone(),
        ));
    }

    fn recenter(&mut self, coords: Coordinates, zoom: u8, pan: &PanOptions) {
        self.log
            .borrow_mut()
            .push(Call::Recenter(coords, zoom, pan.animate));
    }
}

/// Renderer fake recording into a shared log.
pub struct RecordingRenderer {
    log: CallLog,
}

impl Renderer for RecordingRenderer {
    fn append_workout_entry(&mut self, workout: &WorkoutRecord) {
        self.log
            .borrow_mut()
            .push(Call::Entry(workout.id().to_string()));
    }

    fn show_form(&mut self) {
        self.log.borrow_mut().push(Call::ShowForm);
    }

    fn hide_form(&mut self, reset_delay: Duration) {
        self.log.borrow_mut().push(Call::HideForm(reset_delay));
    }

    fn clear_form(&mut self) {
        self.log.borrow_mut().push(Call::ClearForm);
    }

    fn toggle_kind_field(&mut self, kind: WorkoutKind) {
        self.log.borrow_mut().push(Call::ToggleKind(kind));
    }

    fn show_notice(&mut self, message: &str) {
        self.log.borrow_mut().push(Call::Notice(message.to_string()));
    }

    fn reload(&mut self) {
        self.log.borrow_mut().push(Call::Reload);
    }
}

/// Memory store that also logs every write.
#[allow(dead_code)]
pub struct RecordingStore {
    inner: MemoryStore,
    log: CallLog,
}

impl KeyValueStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.inner.set(key, value)?;
        self.log.borrow_mut().push(Call::Saved(key.to_string()));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove(key)
    }
}

pub type TestSession = Session<RecordingMap, RecordingRenderer, MemoryStore>;
#[allow(dead_code)]
pub type RecordingSession = Session<RecordingMap, RecordingRenderer, RecordingStore>;

/// Restore a session over `store` with recording collaborators.
#[allow(dead_code)]
pub fn restore_session(store: MemoryStore) -> (TestSession, CallLog) {
    build(store, false)
}

/// Like [`restore_session`], but with a map that refuses to initialize.
#[allow(dead_code)]
pub fn restore_session_with_broken_map(store: MemoryStore) -> (TestSession, CallLog) {
    build(store, true)
}

fn build(store: MemoryStore, fail_init: bool) -> (TestSession, CallLog) {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let session = build_with_log(&log, store, fail_init);
    (session, log)
}

fn build_with_log<S: KeyValueStore>(
    log: &CallLog,
    store: S,
    fail_init: bool,
) -> Session<RecordingMap, RecordingRenderer, S> {
    let map = RecordingMap {
        log: log.clone(),
        fail_init,
    };
    let renderer = RecordingRenderer { log: log.clone() };
    Session::restore(Config::default(), map, renderer, store)
}

/// Restored session whose map is already up.
#[allow(dead_code)]
pub fn ready_session(store: MemoryStore) -> (TestSession, CallLog) {
    let (mut session, log) = restore_session(store);
    session.on_position_resolved(home());
    session.on_map_ready();
    log.borrow_mut().clear();
    (session, log)
}

/// Like [`ready_session`], but storage writes land in the call log too.
#[allow(dead_code)]
pub fn ready_recording_session(store: MemoryStore) -> (RecordingSession, CallLog) {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let store = RecordingStore {
        inner: store,
        log: log.clone(),
    };
    let mut session = build_with_log(&log, store, false);
    session.on_position_resolved(home());
    session.on_map_ready();
    log.borrow_mut().clear();
    (session, log)
}

#[allow(dead_code)]
pub fn home() -> Coordinates {
    Coordinates::new(39.0, -12.0).expect("valid coordinates")
}
