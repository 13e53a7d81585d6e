// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Geolocation sensor contract.

use std::future::Future;
use std::time::Duration;

use crate::error::{AppError, Result};
use crate::models::Coordinates;

/// Single-shot position lookup.
pub trait Geolocator {
    fn current_position(&self) -> impl Future<Output = Result<Coordinates>> + Send;
}

/// Reports a configured position after an optional delay.
///
/// With no position configured it behaves like a denied permission prompt.
#[derive(Debug, Clone, Default)]
pub struct FixedGeolocator {
    position: Option<Coordinates>,
    delay: Duration,
}

impl FixedGeolocator {
    pub fn new(position: Option<Coordinates>) -> Self {
        Self {
            position,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> Result<Coordinates> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.position.ok_or_else(|| {
            AppError::SensorUnavailable("no position configured (set MAPTY_HOME_LAT/LNG)".into())
        })
    }
}
