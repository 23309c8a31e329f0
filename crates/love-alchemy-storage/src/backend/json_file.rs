//! File-backed key-value storage, one JSON file per key.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::error::{StorageError, StorageResult};

use super::KeyValueBackend;

/// Stores each key as `<root>/<key>.json`.
///
/// Writes go through a sibling temp file and an atomic rename, so a
/// crash mid-write leaves the previous value intact rather than a
/// truncated file.
#[derive(Debug)]
pub struct JsonFileBackend {
    root: PathBuf,
}

impl JsonFileBackend {
    /// Open (creating if needed) the backing directory.
    ///
    /// # Errors
    /// [`StorageError::OpenFailed`] when the directory cannot be
    /// created.
    pub fn open(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            error!("failed to create store directory {}: {e}", root.display());
            StorageError::OpenFailed {
                path: root.display().to_string(),
                message: e.to_string(),
            }
        })?;
        debug!("opened json file backend at {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueBackend for JsonFileBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.file_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                error!("read of key '{key}' failed: {e}");
                Err(StorageError::ReadFailed(format!("key '{key}': {e}")))
            }
        }
    }

    fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.file_path(key);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value).map_err(|e| {
            error!("write of key '{key}' failed: {e}");
            StorageError::WriteFailed(format!("key '{key}': {e}"))
        })?;
        fs::rename(&temp_path, &path).map_err(|e| {
            error!("rename into key '{key}' failed: {e}");
            StorageError::WriteFailed(format!("key '{key}': {e}"))
        })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match fs::remove_file(self.file_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                error!("remove of key '{key}' failed: {e}");
                Err(StorageError::WriteFailed(format!("key '{key}': {e}")))
            }
        }
    }
}
