// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Key-value persistence medium.
//!
//! The session only ever needs string values under a handful of keys, the
//! same contract browser local storage offers.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Key names as constants.
pub mod keys {
    /// Snapshot of the whole workout list
    pub const WORKOUTS: &str = "workouts";
}

/// Raw string storage keyed by name.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if there is none.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
