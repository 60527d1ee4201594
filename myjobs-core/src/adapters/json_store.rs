//! File-backed state store
//!
//! One `<name>.json` file per blob in the app directory, pretty-printed so
//! the state stays inspectable with a text editor. Stands in for the web
//! client's local storage.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::result::{Error, Result};
use crate::ports::StateStore;

/// State store writing each named blob to its own JSON file
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory, creating it if needed
    pub fn new(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn blob_path(&self, name: &str) -> Result<PathBuf> {
        // Blob names are fixed constants, but guard against path tricks
        // anyway since the name becomes a file name.
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(Error::store(format!("invalid blob name '{}'", name)));
        }
        Ok(self.dir.join(format!("{}.json", name)))
    }
}

impl StateStore for JsonFileStore {
    fn save(&self, name: &str, blob: &Value) -> Result<()> {
        let path = self.blob_path(name)?;
        let content = serde_json::to_string_pretty(blob)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<Value>> {
        let path = self.blob_path(name)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        let blob = serde_json::from_str(&content)?;
        Ok(Some(blob))
    }

    fn clear(&self, name: &str) -> Result<()> {
        let path = self.blob_path(name)?;
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();

        let blob = json!({"theme": "dark"});
        store.save("theme", &blob).unwrap();
        assert_eq!(store.load("theme").unwrap(), Some(blob));
    }

    #[test]
    fn test_load_absent_blob() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        assert_eq!(store.load("auth").unwrap(), None);
    }

    #[test]
    fn test_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();

        store.save("auth", &json!({"isAuthenticated": true})).unwrap();
        store.save("auth", &json!({"isAuthenticated": false})).unwrap();
        assert_eq!(
            store.load("auth").unwrap(),
            Some(json!({"isAuthenticated": false}))
        );
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();

        store.save("matching", &json!({})).unwrap();
        store.clear("matching").unwrap();
        assert_eq!(store.load("matching").unwrap(), None);
        // Clearing twice is fine
        store.clear("matching").unwrap();
    }

    #[test]
    fn test_corrupt_blob_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();

        std::fs::write(dir.path().join("auth.json"), "{not json").unwrap();
        assert!(store.load("auth").is_err());
    }

    #[test]
    fn test_rejects_path_like_names() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        assert!(store.save("../escape", &json!({})).is_err());
    }
}
