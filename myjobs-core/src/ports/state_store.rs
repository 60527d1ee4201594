//! State store port - persisted key-value blob abstraction
//!
//! The web client kept each store in browser local storage under a fixed
//! key. This port is the same contract: save/restore a named JSON blob,
//! written through synchronously on every mutation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::domain::result::Result;

/// Blob names, one per persisted store
pub const AUTH_BLOB: &str = "auth";
pub const THEME_BLOB: &str = "theme";
pub const MATCHING_BLOB: &str = "matching";

/// Named JSON blob storage
///
/// Implementations (adapters) decide where the bytes live. Saving overwrites
/// any prior content under the same name.
pub trait StateStore: Send + Sync {
    /// Persist a blob under the given name
    fn save(&self, name: &str, blob: &Value) -> Result<()>;

    /// Read a blob back, `None` if nothing was ever saved under the name
    fn load(&self, name: &str) -> Result<Option<Value>>;

    /// Remove the blob if present
    fn clear(&self, name: &str) -> Result<()>;
}

/// Serialize a typed state and write it through
pub fn save_state<T: Serialize>(store: &dyn StateStore, name: &str, state: &T) -> Result<()> {
    let blob = serde_json::to_value(state)?;
    store.save(name, &blob)
}

/// Restore a typed state from the store.
///
/// Returns `None` when the blob is absent, unreadable, or fails to
/// deserialize; callers fall back to their default state in that case
/// (corrupt persisted data never blocks startup).
pub fn load_state<T: DeserializeOwned>(store: &dyn StateStore, name: &str) -> Option<T> {
    match store.load(name) {
        Ok(Some(blob)) => serde_json::from_value(blob).ok(),
        _ => None,
    }
}
