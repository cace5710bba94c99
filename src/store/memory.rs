//! In-memory preference store.

use std::collections::HashMap;

use super::Persistence;

/// A `HashMap`-backed store with no durability.
///
/// # Example
///
/// ```rust
/// use nightshift::{MemoryStore, Persistence, THEME_KEY};
///
/// let store = MemoryStore::new().with(THEME_KEY, "dark");
/// assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the updated store for chaining.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl Persistence for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}
