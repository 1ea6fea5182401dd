//! Key-value persistence for numeric values
//!
//! The game only stores its best score. Stores never fail loudly: a value
//! that cannot be read is absent, a write that cannot complete is dropped
//! with a warning.

use std::collections::HashMap;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// External get/set cell for numbers
pub trait ScoreStore {
    /// Stored value, or `None` when unset or unreadable
    fn get(&self, key: &str) -> Option<f64>;
    /// Store a value; failures are logged and ignored
    fn set(&mut self, key: &str, value: f64);
}

/// In-process store (tests, headless runs)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, f64>,
    /// Number of `set` calls, for checking write frequency
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: f64) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value);
        store
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), value);
        self.writes += 1;
    }
}

/// A store that never holds anything (persistence unavailable)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl ScoreStore for NullStore {
    fn get(&self, _key: &str) -> Option<f64> {
        None
    }

    fn set(&mut self, _key: &str, _value: f64) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("highScore"), None);
        store.set("highScore", 12.0);
        assert_eq!(store.get("highScore"), Some(12.0));
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn test_null_store_forgets() {
        let mut store = NullStore;
        store.set("highScore", 3.0);
        assert_eq!(store.get("highScore"), None);
    }
}
