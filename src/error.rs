// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! Nothing in the session is fatal: every variant degrades one feature
//! (record creation, the map, persistence) while the rest keeps working.

/// Application error type shared by the model, controller and collaborators.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Position unavailable: {0}")]
    SensorUnavailable(String),

    #[error("Map is not available")]
    MapUnavailable,

    #[error("Storage unavailable: {0}")]
    PersistenceUnavailable(String),

    #[error("Unknown workout id: {0}")]
    StaleReference(String),

    #[error("No location selected")]
    NoPendingLocation,
}

impl AppError {
    /// Warning shown to the user for rejected form input.
    pub const INVALID_INPUT_NOTICE: &'static str = "Inputs have to be positive numbers!";

    /// Notice shown when the position could not be determined.
    pub const NO_POSITION_NOTICE: &'static str = "Could not get your position";

    /// Whether this error warrants a notice on the rendering surface.
    ///
    /// Persistence and stale-reference failures are only logged: losing
    /// storage must never interrupt the session, and a stale list entry is
    /// not something the user can act on.
    pub fn is_user_visible(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::SensorUnavailable(_) | AppError::MapUnavailable
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::PersistenceUnavailable(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::PersistenceUnavailable(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, AppError>;
