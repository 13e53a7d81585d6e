// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interaction and map states of a session.

use crate::models::Coordinates;

/// Where the user is in the create-a-workout flow.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SessionState {
    /// No location picked.
    #[default]
    Idle,
    /// A map click picked `pending`; the form is open.
    AwaitingFormInput { pending: Coordinates },
}

impl SessionState {
    pub fn pending(&self) -> Option<Coordinates> {
        match self {
            SessionState::Idle => None,
            SessionState::AwaitingFormInput { pending } => Some(*pending),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SessionState::Idle)
    }
}

/// Lifecycle of the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapStatus {
    /// Waiting for the position fix or for the map to finish loading.
    #[default]
    Loading,
    Ready,
    /// Position or map failed; workouts can be browsed but not created.
    Unavailable,
}
