//! Key-value backends.
//!
//! The stores only ever need three operations on string keys and JSON
//! string values, so the seam is a minimal synchronous trait with two
//! implementations: an in-memory map for tests and ephemeral use, and a
//! one-file-per-key JSON directory for real use.

mod json_file;

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::StorageResult;

pub use json_file::JsonFileBackend;

/// Minimal synchronous key-value interface the stores are written
/// against.
///
/// Implementations report failures as typed [`crate::StorageError`]s;
/// a missing key is `Ok(None)`, never an error.
pub trait KeyValueBackend: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// In-memory backend. Nothing survives a drop.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}
