//! Browser LocalStorage store

use super::ScoreStore;

/// Values are kept as decimal strings, as the browser stores them
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }

    /// Raw string under `key`
    pub fn read_string(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// Returns false when the browser refused the write
    pub fn write_string(key: &str, value: &str) -> bool {
        Self::storage().is_some_and(|s| s.set_item(key, value).is_ok())
    }
}

impl ScoreStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<f64> {
        let raw = Self::read_string(key)?;
        raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }

    fn set(&mut self, key: &str, value: f64) {
        if !Self::write_string(key, &value.to_string()) {
            log::warn!("LocalStorage write failed for {}", key);
        }
    }
}
