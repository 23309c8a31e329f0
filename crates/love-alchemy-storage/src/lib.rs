//! Local persistence for Love Alchemy.
//!
//! A small synchronous key-value seam ([`backend::KeyValueBackend`])
//! carries JSON blobs for two capped, most-recent-first stores: the
//! calculation [`history`] and user [`feedback`]. Durability is
//! best-effort by design: unreadable or corrupt values degrade to an
//! empty collection (with a warning logged), never to a crash.
//!
//! The read-modify-write cycle behind [`history::HistoryStore::append`]
//! is not atomic across processes. Two writers racing on the same key
//! can lose one update; acceptable for a single-user widget log and
//! deliberately not papered over with locking.

pub mod backend;
pub mod error;
pub mod feedback;
pub mod history;

pub use backend::{JsonFileBackend, KeyValueBackend, MemoryBackend};
pub use error::{ExportError, StorageError, StorageResult};
pub use feedback::{FeedbackError, FeedbackRecord, FeedbackStore, FeedbackSubmission};
pub use history::{HistoryConfig, HistoryRecord, HistoryStore, NewHistoryEntry};
