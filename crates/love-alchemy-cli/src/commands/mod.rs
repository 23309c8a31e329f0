//! Command handlers.
//!
//! Handlers take an explicit [`AppContext`] instead of reaching for
//! process-global state, print their result to stdout, and hand back a
//! [`CliExitCode`](crate::CliExitCode).

pub mod feedback;
pub mod history;
pub mod letter;
pub mod matching;
pub mod zodiac;

use std::path::PathBuf;

use tracing::debug;

use love_alchemy_storage::{
    FeedbackStore, HistoryConfig, HistoryStore, JsonFileBackend, StorageResult,
};

/// Where the stores live for this invocation.
pub struct AppContext {
    data_dir: PathBuf,
}

impl AppContext {
    /// Resolve the data directory: explicit flag, else
    /// `~/.love-alchemy`, else `.love-alchemy` in the working
    /// directory.
    pub fn new(data_dir: Option<PathBuf>) -> Self {
        let data_dir = data_dir.unwrap_or_else(|| {
            home_dir()
                .map(|h| h.join(".love-alchemy"))
                .unwrap_or_else(|| PathBuf::from(".love-alchemy"))
        });
        debug!("using data directory {}", data_dir.display());
        Self { data_dir }
    }

    pub fn open_history(&self) -> StorageResult<HistoryStore<JsonFileBackend>> {
        let backend = JsonFileBackend::open(&self.data_dir)?;
        Ok(HistoryStore::new(backend, HistoryConfig::quick()))
    }

    pub fn open_feedback(&self) -> StorageResult<FeedbackStore<JsonFileBackend>> {
        let backend = JsonFileBackend::open(&self.data_dir)?;
        Ok(FeedbackStore::new(backend))
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
