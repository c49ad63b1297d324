// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Most-recently-used command ids.

use crate::storage::{load_json, save_json, KeyValueStore, StorageError, RECENTS_KEY};

/// Upper bound on remembered commands.
pub const MAX_RECENTS: usize = 10;

/// Bounded, deduplicated, most-recent-first list of command ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecencyList {
    ids: Vec<String>,
    limit: usize,
}

impl Default for RecencyList {
    fn default() -> Self {
        Self::new()
    }
}

impl RecencyList {
    pub fn new() -> Self {
        Self::with_limit(MAX_RECENTS)
    }

    /// A limit outside `1..=MAX_RECENTS` is clamped.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            ids: Vec::new(),
            limit: limit.clamp(1, MAX_RECENTS),
        }
    }

    pub fn from_ids(ids: Vec<String>, limit: usize) -> Self {
        let mut list = Self::with_limit(limit);
        for id in ids.into_iter().rev() {
            list.push(id);
        }
        list
    }

    /// Load from the store. Missing or malformed data yields an empty list.
    pub fn load(store: &dyn KeyValueStore, limit: usize) -> Self {
        let ids: Vec<String> = load_json(store, RECENTS_KEY).unwrap_or_default();
        Self::from_ids(ids, limit)
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        save_json(store, RECENTS_KEY, &self.ids)
    }

    /// Move `id` to the front, dropping the oldest entry past the limit.
    pub fn push(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.ids.retain(|existing| *existing != id);
        self.ids.insert(0, id);
        self.ids.truncate(self.limit);
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
#[path = "recents_tests.rs"]
mod tests;
