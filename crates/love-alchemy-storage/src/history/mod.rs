//! Calculation history: a capped, most-recent-first, persisted log.
//!
//! Records are immutable once written; the store only prepends, removes
//! by id, or clears. On disk the list lives under a single key as a
//! versioned JSON envelope. Reads also accept the two legacy layouts
//! that predate the envelope (see [`migration`]) and normalize them.

mod migration;

#[cfg(test)]
mod tests;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::backend::KeyValueBackend;
use crate::error::{ExportError, StorageError, StorageResult};

/// Storage key of the main calculator widget.
pub const DEFAULT_HISTORY_KEY: &str = "love_alchemy_history_v1";

/// Storage key of the history-popup widget.
pub const ARCHIVE_HISTORY_KEY: &str = "love_calculator_history";

/// Envelope schema version written by this crate.
pub const SCHEMA_VERSION: u32 = 2;

/// One stored calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Stable identifier assigned at creation; the only handle for
    /// deletion.
    pub id: Uuid,
    /// First identifier (name or sign).
    pub left: String,
    /// Second identifier (name or sign).
    pub right: String,
    /// Score in [1, 100].
    pub percent: u8,
    /// Mood or band label at the time of calculation.
    pub mood: String,
    /// Verdict message shown with the score.
    pub message: String,
    /// Creation time.
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct HistoryEnvelope {
    pub(crate) version: u32,
    pub(crate) records: Vec<HistoryRecord>,
}

/// The caller-supplied part of a new record; id and timestamp are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewHistoryEntry {
    pub left: String,
    pub right: String,
    pub percent: u8,
    pub mood: String,
    pub message: String,
}

/// Which key the list lives under and how many records it may hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    pub storage_key: String,
    pub capacity: usize,
}

impl HistoryConfig {
    /// Main widget profile: last ten calculations.
    pub fn quick() -> Self {
        Self {
            storage_key: DEFAULT_HISTORY_KEY.to_string(),
            capacity: 10,
        }
    }

    /// Popup archive profile: last fifty calculations.
    pub fn archive() -> Self {
        Self {
            storage_key: ARCHIVE_HISTORY_KEY.to_string(),
            capacity: 50,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self::quick()
    }
}

/// Capped history log over a key-value backend.
///
/// Append is a read-modify-write of the whole list and is not atomic
/// across processes; concurrent writers can lose an update. Accepted
/// for a single-user log.
#[derive(Debug)]
pub struct HistoryStore<B: KeyValueBackend> {
    backend: B,
    config: HistoryConfig,
}

impl<B: KeyValueBackend> HistoryStore<B> {
    pub fn new(backend: B, config: HistoryConfig) -> Self {
        Self { backend, config }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// All records, most recent first.
    ///
    /// # Errors
    /// [`StorageError::Corrupted`] when a stored value exists but does
    /// not parse as any known layout; backend errors pass through.
    pub fn list(&self) -> StorageResult<Vec<HistoryRecord>> {
        let key = &self.config.storage_key;
        match self.backend.get(key)? {
            None => Ok(Vec::new()),
            Some(raw) => migration::parse_stored(&raw).map_err(|e| {
                warn!("history under '{key}' does not parse: {e}");
                StorageError::Corrupted {
                    key: key.clone(),
                    message: e.to_string(),
                }
            }),
        }
    }

    /// The degraded read: any failure logs a warning and yields an
    /// empty list, so the widget keeps working without history.
    pub fn list_or_empty(&self) -> Vec<HistoryRecord> {
        self.list().unwrap_or_else(|e| {
            warn!("history unavailable, continuing empty: {e}");
            Vec::new()
        })
    }

    /// Prepend a record, evicting the oldest past capacity.
    ///
    /// Starts from the degraded read, so a corrupt stored value is
    /// replaced by a fresh list instead of blocking new calculations.
    pub fn append(&self, entry: NewHistoryEntry) -> StorageResult<HistoryRecord> {
        let record = HistoryRecord {
            id: Uuid::new_v4(),
            left: entry.left,
            right: entry.right,
            percent: entry.percent,
            mood: entry.mood,
            message: entry.message,
            recorded_at: Utc::now(),
        };

        let mut records = self.list_or_empty();
        records.insert(0, record.clone());
        records.truncate(self.config.capacity);
        self.save(&records)?;
        debug!(
            "appended history record {} ({} of {})",
            record.id,
            records.len(),
            self.config.capacity
        );
        Ok(record)
    }

    /// Remove the record with the given id. `Ok(false)` when no record
    /// matches; not an error.
    pub fn remove_by_id(&self, id: Uuid) -> StorageResult<bool> {
        let mut records = self.list()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.save(&records)?;
        Ok(true)
    }

    /// Drop the whole list by removing its key.
    pub fn clear(&self) -> StorageResult<()> {
        self.backend.remove(&self.config.storage_key)
    }

    /// Serialize all records to the downloadable text block, most
    /// recent first.
    ///
    /// # Errors
    /// [`ExportError::NothingToExport`] when the list is empty;
    /// [`ExportError::Storage`] when it cannot be read.
    pub fn export_text(&self) -> Result<String, ExportError> {
        let records = self.list()?;
        if records.is_empty() {
            return Err(ExportError::NothingToExport);
        }

        let mut out = String::from("LOVE ALCHEMY HISTORY\n\n");
        out.push_str(&"=".repeat(50));
        out.push_str("\n\n");
        for (i, record) in records.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} ❤️ {}\nScore: {}%\nMood: {}\nDate: {}\n{}\n",
                i + 1,
                record.left,
                record.right,
                record.percent,
                record.mood,
                record.recorded_at.format("%Y-%m-%d %H:%M UTC"),
                record.message,
            ));
            out.push_str(&"-".repeat(50));
            out.push_str("\n\n");
        }
        Ok(out)
    }

    fn save(&self, records: &[HistoryRecord]) -> StorageResult<()> {
        let envelope = HistoryEnvelope {
            version: SCHEMA_VERSION,
            records: records.to_vec(),
        };
        let raw = serde_json::to_string(&envelope)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.backend.put(&self.config.storage_key, &raw)
    }
}
