// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Mapty: log runs and rides by clicking on a map.
//!
//! This crate provides the workout model and the session controller that
//! ties a map surface, a rendering surface and key-value storage together.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod session;

pub use session::{Session, SessionEvent};
