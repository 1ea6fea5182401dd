//! Best score tracking
//!
//! Read once from the store at startup, written back the moment a run
//! beats it.

use crate::persistence::ScoreStore;

/// Best score, monotonically non-decreasing for the process lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestScore {
    pub value: u32,
}

impl BestScore {
    /// Store key for the best score
    pub const STORAGE_KEY: &'static str = "highScore";

    pub fn new(value: u32) -> Self {
        Self { value }
    }

    /// Read from the store; absent or nonsense values count as zero
    pub fn load(store: &dyn ScoreStore) -> Self {
        let value = store
            .get(Self::STORAGE_KEY)
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(|v| v.min(u32::MAX as f64) as u32)
            .unwrap_or(0);
        log::info!("Loaded best score {}", value);
        Self { value }
    }

    /// Write the current value to the store
    pub fn save(&self, store: &mut dyn ScoreStore) {
        store.set(Self::STORAGE_KEY, self.value as f64);
        log::info!("Best score saved ({})", self.value);
    }

    /// Raise the best if `score` beats it; returns true when raised
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.value {
            self.value = score;
            return true;
        }
        false
    }
}
