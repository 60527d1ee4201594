//! In-memory state store for tests

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::domain::result::{Error, Result};
use crate::ports::StateStore;

/// State store holding blobs in a map, nothing survives the process
#[derive(Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a blob directly, bypassing serialization helpers
    pub fn preload(&self, name: &str, blob: Value) {
        self.blobs
            .lock()
            .expect("memory store poisoned")
            .insert(name.to_string(), blob);
    }
}

impl StateStore for MemoryStore {
    fn save(&self, name: &str, blob: &Value) -> Result<()> {
        self.blobs
            .lock()
            .map_err(|_| Error::store("memory store poisoned"))?
            .insert(name.to_string(), blob.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<Value>> {
        Ok(self
            .blobs
            .lock()
            .map_err(|_| Error::store("memory store poisoned"))?
            .get(name)
            .cloned())
    }

    fn clear(&self, name: &str) -> Result<()> {
        self.blobs
            .lock()
            .map_err(|_| Error::store("memory store poisoned"))?
            .remove(name);
        Ok(())
    }
}
