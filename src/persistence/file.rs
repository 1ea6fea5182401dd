//! JSON file store for native builds

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::ScoreStore;

/// Flat `{ "key": number }` JSON object on disk, rewritten on every set
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, f64>,
}

impl JsonFileStore {
    /// Open the store; a missing or corrupt file starts empty
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(values) => values,
                Err(e) => {
                    log::warn!("Ignoring corrupt store {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                log::warn!("Cannot read store {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) {
        let json = match serde_json::to_string_pretty(&self.values) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cannot encode store: {}", e);
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            log::warn!("Cannot write store {}: {}", self.path.display(), e);
        }
    }
}

impl ScoreStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied().filter(|v| v.is_finite())
    }

    fn set(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), value);
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("flappy_sky_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_persists_across_opens() {
        let path = temp_path("persist");
        let _ = fs::remove_file(&path);

        let mut store = JsonFileStore::open(&path);
        assert_eq!(store.get("highScore"), None);
        store.set("highScore", 17.0);

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("highScore"), Some(17.0));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let path = temp_path("corrupt");
        fs::write(&path, "{ definitely not json").unwrap();
        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("highScore"), None);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unwritable_path_is_ignored() {
        let path = std::env::temp_dir()
            .join("flappy_sky_missing_dir_for_tests")
            .join("nested")
            .join("scores.json");
        let mut store = JsonFileStore::open(&path);
        store.set("highScore", 5.0);
        // In-memory value still updated even though the write failed
        assert_eq!(store.get("highScore"), Some(5.0));
    }
}
