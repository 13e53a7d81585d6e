// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::db::KeyValueStore;
use crate::error::{AppError, Result};

/// Shared in-memory store. Clones see the same entries.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: Option<Arc<Mutex<HashMap<String, String>>>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Some(Arc::new(Mutex::new(HashMap::new()))),
        }
    }

    /// Create a store whose every operation fails (storage disabled or full).
    pub fn unavailable() -> Self {
        Self { entries: None }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .as_ref()
            .ok_or_else(|| AppError::PersistenceUnavailable("storage disabled".to_string()))?
            .lock()
            .map_err(|_| AppError::PersistenceUnavailable("storage lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
