//! On-read normalization of stored history layouts.
//!
//! Three layouts are accepted:
//! - the current versioned envelope `{version, records}`;
//! - the bare array the main widget wrote: `{name1, name2, percent,
//!   msg, mood, tip, t}` with `t` in epoch milliseconds;
//! - the bare array the popup widget wrote: `{id, name1, name2,
//!   percentage, mood, description, timestamp, date}` with an ISO-8601
//!   `timestamp`.
//!
//! Legacy records get fresh ids; their numeric ids were wall-clock
//! milliseconds and collide. Nothing ever writes the legacy layouts
//! back.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::{HistoryEnvelope, HistoryRecord};

/// Parse any accepted stored layout into canonical records.
pub(crate) fn parse_stored(raw: &str) -> Result<Vec<HistoryRecord>, serde_json::Error> {
    let stored: StoredHistory = serde_json::from_str(raw)?;
    Ok(match stored {
        StoredHistory::Envelope(envelope) => envelope.records,
        StoredHistory::Flat(records) => records.into_iter().map(StoredRecord::normalize).collect(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredHistory {
    Envelope(HistoryEnvelope),
    Flat(Vec<StoredRecord>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredRecord {
    Canonical(HistoryRecord),
    LegacyMain(LegacyMainRecord),
    LegacyPopup(LegacyPopupRecord),
}

/// `saveHistory` layout of the main widget.
#[derive(Deserialize)]
struct LegacyMainRecord {
    name1: String,
    name2: String,
    percent: i64,
    msg: String,
    mood: String,
    #[serde(default)]
    #[allow(dead_code)]
    tip: Option<String>,
    t: i64,
}

/// `HistoryManager` layout of the popup widget.
#[derive(Deserialize)]
struct LegacyPopupRecord {
    #[serde(default)]
    #[allow(dead_code)]
    id: Option<i64>,
    name1: String,
    name2: String,
    percentage: i64,
    mood: String,
    description: String,
    timestamp: String,
    #[serde(default)]
    #[allow(dead_code)]
    date: Option<String>,
}

impl StoredRecord {
    fn normalize(self) -> HistoryRecord {
        match self {
            StoredRecord::Canonical(record) => record,
            StoredRecord::LegacyMain(r) => HistoryRecord {
                id: Uuid::new_v4(),
                left: r.name1,
                right: r.name2,
                percent: clamp_percent(r.percent),
                mood: r.mood,
                message: r.msg,
                recorded_at: DateTime::from_timestamp_millis(r.t)
                    .unwrap_or(DateTime::UNIX_EPOCH),
            },
            StoredRecord::LegacyPopup(r) => HistoryRecord {
                id: Uuid::new_v4(),
                left: r.name1,
                right: r.name2,
                percent: clamp_percent(r.percentage),
                mood: r.mood,
                message: r.description,
                recorded_at: DateTime::parse_from_rfc3339(&r.timestamp)
                    .map(|dt| dt.with_timezone(&Utc))
                    .unwrap_or(DateTime::UNIX_EPOCH),
            },
        }
    }
}

/// Stored percents are untrusted; pull them back into [1, 100].
fn clamp_percent(value: i64) -> u8 {
    value.clamp(1, 100) as u8
}
