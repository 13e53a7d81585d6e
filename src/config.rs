// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::models::Coordinates;

/// Default map tile source (OpenStreetMap France "hot" style).
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";

/// Attribution required by the tile source.
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the file-backed key-value store
    pub storage_dir: PathBuf,
    /// Key under which the workout snapshot is stored
    pub storage_key: String,
    /// Zoom level for the initial view and for recentering on a workout
    pub map_zoom: u8,
    /// Tile URL template handed to the map surface
    pub tile_url: String,
    /// Tile attribution handed to the map surface
    pub tile_attribution: String,
    /// Delay before the hidden form restores its display mode
    pub form_reset_delay: Duration,
    /// Duration of the animated pan when recentering
    pub pan_duration_secs: f64,
    /// Fixed position reported by the demo geolocator, if any
    pub home_position: Option<Coordinates>,
}

impl Default for Config {
    /// Default config, also used by tests.
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(".mapty"),
            storage_key: "workouts".to_string(),
            map_zoom: 13,
            tile_url: DEFAULT_TILE_URL.to_string(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
            form_reset_delay: Duration::from_millis(1000),
            pan_duration_secs: 1.0,
            home_position: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional; unset ones keep their default. A `.env`
    /// file in the working directory is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        let storage_key = env::var("MAPTY_STORAGE_KEY").unwrap_or(defaults.storage_key);
        if storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("MAPTY_STORAGE_KEY", storage_key));
        }

        let home_position = match (env::var("MAPTY_HOME_LAT"), env::var("MAPTY_HOME_LNG")) {
            (Ok(lat), Ok(lng)) => {
                let lat: f64 = parse_var("MAPTY_HOME_LAT", &lat)?;
                let lng: f64 = parse_var("MAPTY_HOME_LNG", &lng)?;
                let coords = Coordinates::new(lat, lng).map_err(|_| {
                    ConfigError::Invalid("MAPTY_HOME_LAT/MAPTY_HOME_LNG", format!("{lat},{lng}"))
                })?;
                Some(coords)
            }
            (Err(_), Err(_)) => None,
            (Ok(_), Err(_)) => return Err(ConfigError::Missing("MAPTY_HOME_LNG")),
            (Err(_), Ok(_)) => return Err(ConfigError::Missing("MAPTY_HOME_LAT")),
        };

        Ok(Self {
            storage_dir: env::var("MAPTY_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            storage_key,
            map_zoom: optional_var("MAPTY_MAP_ZOOM")?.unwrap_or(defaults.map_zoom),
            tile_url: env::var("MAPTY_TILE_URL").unwrap_or(defaults.tile_url),
            tile_attribution: defaults.tile_attribution,
            form_reset_delay: optional_var("MAPTY_FORM_RESET_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.form_reset_delay),
            pan_duration_secs: optional_var("MAPTY_PAN_DURATION_SECS")?
                .unwrap_or(defaults.pan_duration_secs),
            home_position,
        })
    }
}

fn optional_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => parse_var(name, &raw).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(name, raw.to_string()))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
