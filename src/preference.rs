//! Persistent string preferences.
//!
//! The theme controller is the only writer. In the browser the store is
//! backed by `localStorage` (see `dom::storage`); [`MemoryStore`] stands in
//! when storage is blocked and in tests.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::collections::HashMap;

/// Key/value store for named string preferences.
pub trait PreferenceStore {
    /// Read `key`, or `None` when unset or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`. Write failures are absorbed by the store.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store. Lives only as long as the page.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Number of `set` calls made so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}
