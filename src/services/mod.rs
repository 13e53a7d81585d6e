// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - collaborators around the session.

pub mod console;
pub mod geolocation;
pub mod map;
pub mod persistence;
pub mod render;

pub use console::{ConsoleMap, ConsoleRenderer};
pub use geolocation::{FixedGeolocator, Geolocator};
pub use map::{MapOptions, MapSurface, MarkerPopup, PanOptions};
pub use persistence::WorkoutRepository;
pub use render::{entry_fields, EntryField, Renderer};
