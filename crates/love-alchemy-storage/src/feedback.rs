//! User feedback: validated submissions with the same capped,
//! most-recent-first persistence pattern as the history log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use love_alchemy_core::validate::validate_email;
use love_alchemy_core::ValidationError;

use crate::backend::KeyValueBackend;
use crate::error::{StorageError, StorageResult};

/// Storage key of the feedback widget.
pub const FEEDBACK_KEY: &str = "lovecalc_feedbacks";

/// Most submissions kept before the oldest are evicted.
pub const FEEDBACK_CAPACITY: usize = 50;

/// A stored feedback submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    /// Star rating in [1, 5].
    pub rating: u8,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

/// What the user typed; validated before it becomes a record.
#[derive(Debug, Clone, Default)]
pub struct FeedbackSubmission {
    pub name: String,
    pub email: Option<String>,
    pub rating: u8,
    pub message: String,
}

impl FeedbackSubmission {
    /// Reject ratings outside [1, 5], blank names or messages, and
    /// malformed emails (email itself is optional).
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=5).contains(&self.rating) {
            return Err(ValidationError::RatingOutOfRange(self.rating));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyFeedbackName);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

/// Failure modes of a submission: bad input or a persistence problem.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Capped feedback log over a key-value backend.
#[derive(Debug)]
pub struct FeedbackStore<B: KeyValueBackend> {
    backend: B,
    storage_key: String,
    capacity: usize,
}

impl<B: KeyValueBackend> FeedbackStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            storage_key: FEEDBACK_KEY.to_string(),
            capacity: FEEDBACK_CAPACITY,
        }
    }

    /// Validate and persist a submission.
    pub fn submit(&self, submission: FeedbackSubmission) -> Result<FeedbackRecord, FeedbackError> {
        submission.validate()?;

        let record = FeedbackRecord {
            id: Uuid::new_v4(),
            name: submission.name.trim().to_string(),
            email: submission.email,
            rating: submission.rating,
            message: submission.message.trim().to_string(),
            submitted_at: Utc::now(),
        };

        let mut records = self.list_or_empty();
        records.insert(0, record.clone());
        records.truncate(self.capacity);
        self.save(&records)?;
        debug!("stored feedback {} ({} stars)", record.id, record.rating);
        Ok(record)
    }

    /// All submissions, most recent first.
    pub fn list(&self) -> StorageResult<Vec<FeedbackRecord>> {
        match self.backend.get(&self.storage_key)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                warn!("feedback under '{}' does not parse: {e}", self.storage_key);
                StorageError::Corrupted {
                    key: self.storage_key.clone(),
                    message: e.to_string(),
                }
            }),
        }
    }

    pub fn list_or_empty(&self) -> Vec<FeedbackRecord> {
        self.list().unwrap_or_else(|e| {
            warn!("feedback unavailable, continuing empty: {e}");
            Vec::new()
        })
    }

    pub fn clear(&self) -> StorageResult<()> {
        self.backend.remove(&self.storage_key)
    }

    fn save(&self, records: &[FeedbackRecord]) -> StorageResult<()> {
        let raw = serde_json::to_string(records)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.backend.put(&self.storage_key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::MemoryBackend;

    use super::*;

    fn submission(rating: u8, message: &str) -> FeedbackSubmission {
        FeedbackSubmission {
            name: "Ann".to_string(),
            email: Some("ann@example.org".to_string()),
            rating,
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_submission_is_stored() {
        let store = FeedbackStore::new(MemoryBackend::new());
        let record = store.submit(submission(5, "Lovely little app")).unwrap();
        assert_eq!(record.rating, 5);

        let records = store.list().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], record);
    }

    #[test]
    fn rating_bounds_are_enforced() {
        let store = FeedbackStore::new(MemoryBackend::new());
        for rating in [0, 6, 200] {
            let err = store.submit(submission(rating, "hi")).unwrap_err();
            assert!(matches!(
                err,
                FeedbackError::Invalid(ValidationError::RatingOutOfRange(r)) if r == rating
            ));
        }
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn blank_fields_are_rejected() {
        let store = FeedbackStore::new(MemoryBackend::new());
        assert!(matches!(
            store.submit(submission(3, "   ")).unwrap_err(),
            FeedbackError::Invalid(ValidationError::EmptyMessage)
        ));

        let mut no_name = submission(3, "fine");
        no_name.name = String::new();
        assert!(matches!(
            store.submit(no_name).unwrap_err(),
            FeedbackError::Invalid(ValidationError::EmptyFeedbackName)
        ));
    }

    #[test]
    fn email_is_optional_but_checked_when_present() {
        let store = FeedbackStore::new(MemoryBackend::new());

        let mut anonymous = submission(4, "nice");
        anonymous.email = None;
        assert!(store.submit(anonymous).is_ok());

        let mut bad_email = submission(4, "nice");
        bad_email.email = Some("not-an-email".to_string());
        assert!(matches!(
            store.submit(bad_email).unwrap_err(),
            FeedbackError::Invalid(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn newest_submission_comes_first_and_cap_holds() {
        let store = FeedbackStore::new(MemoryBackend::new());
        for i in 0..FEEDBACK_CAPACITY + 5 {
            store.submit(submission(3, &format!("note {i}"))).unwrap();
        }
        let records = store.list().unwrap();
        assert_eq!(records.len(), FEEDBACK_CAPACITY);
        assert_eq!(records[0].message, format!("note {}", FEEDBACK_CAPACITY + 4));
    }

    #[test]
    fn corrupt_value_degrades_to_empty() {
        let backend = MemoryBackend::new();
        backend.put(FEEDBACK_KEY, "]]][[").unwrap();
        let store = FeedbackStore::new(backend);
        assert!(store.list().is_err());
        assert!(store.list_or_empty().is_empty());
        // a new submission recovers the key
        store.submit(submission(2, "still works")).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn clear_removes_everything() {
        let store = FeedbackStore::new(MemoryBackend::new());
        store.submit(submission(1, "meh")).unwrap();
        store.clear().unwrap();
        assert!(store.list().unwrap().is_empty());
    }
}
