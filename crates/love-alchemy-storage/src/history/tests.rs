use uuid::Uuid;

use crate::backend::{KeyValueBackend, MemoryBackend};
use crate::error::{ExportError, StorageError};

use super::*;

fn store_with_capacity(capacity: usize) -> HistoryStore<MemoryBackend> {
    HistoryStore::new(
        MemoryBackend::new(),
        HistoryConfig {
            storage_key: "test_history".to_string(),
            capacity,
        },
    )
}

fn entry(left: &str, right: &str, percent: u8) -> NewHistoryEntry {
    NewHistoryEntry {
        left: left.to_string(),
        right: right.to_string(),
        percent,
        mood: "Playful".to_string(),
        message: "✨ Promising — work & communicate!".to_string(),
    }
}

#[test]
fn empty_store_lists_empty() {
    let store = store_with_capacity(10);
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn append_prepends_most_recent_first() {
    let store = store_with_capacity(10);
    store.append(entry("Ann", "Ben", 50)).unwrap();
    store.append(entry("Cara", "Dan", 60)).unwrap();
    store.append(entry("Eve", "Finn", 70)).unwrap();

    let records = store.list().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].left, "Eve");
    assert_eq!(records[1].left, "Cara");
    assert_eq!(records[2].left, "Ann");
}

#[test]
fn capacity_evicts_from_the_tail() {
    let store = store_with_capacity(3);
    for (i, name) in ["Ann", "Ben", "Cara", "Dan"].iter().enumerate() {
        store.append(entry(name, "X", 40 + i as u8)).unwrap();
    }

    let records = store.list().unwrap();
    assert_eq!(records.len(), 3);
    // newest three survive, the oldest ("Ann") is gone
    assert_eq!(records[0].left, "Dan");
    assert_eq!(records[2].left, "Ben");
    assert!(records.iter().all(|r| r.left != "Ann"));
}

#[test]
fn records_get_distinct_ids() {
    let store = store_with_capacity(10);
    let a = store.append(entry("Ann", "Ben", 50)).unwrap();
    let b = store.append(entry("Ann", "Ben", 50)).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn remove_by_id_filters_only_the_match() {
    let store = store_with_capacity(10);
    store.append(entry("Ann", "Ben", 50)).unwrap();
    let target = store.append(entry("Cara", "Dan", 60)).unwrap();
    store.append(entry("Eve", "Finn", 70)).unwrap();

    assert!(store.remove_by_id(target.id).unwrap());
    let records = store.list().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.id != target.id));
}

#[test]
fn remove_of_unknown_id_is_a_noop() {
    let store = store_with_capacity(10);
    store.append(entry("Ann", "Ben", 50)).unwrap();
    let before = store.list().unwrap();

    assert!(!store.remove_by_id(Uuid::new_v4()).unwrap());
    assert_eq!(store.list().unwrap(), before);
}

#[test]
fn list_is_idempotent() {
    let store = store_with_capacity(10);
    store.append(entry("Ann", "Ben", 50)).unwrap();
    assert_eq!(store.list().unwrap(), store.list().unwrap());
}

#[test]
fn clear_empties_the_store() {
    let store = store_with_capacity(10);
    store.append(entry("Ann", "Ben", 50)).unwrap();
    store.clear().unwrap();
    assert!(store.list().unwrap().is_empty());
    // clearing an already-empty store is fine
    store.clear().unwrap();
}

#[test]
fn export_of_empty_store_is_a_notice() {
    let store = store_with_capacity(10);
    assert!(matches!(
        store.export_text(),
        Err(ExportError::NothingToExport)
    ));
}

#[test]
fn export_lists_records_in_order() {
    let store = store_with_capacity(10);
    store.append(entry("Ann", "Ben", 50)).unwrap();
    store.append(entry("Cara", "Dan", 60)).unwrap();

    let text = store.export_text().unwrap();
    assert!(text.starts_with("LOVE ALCHEMY HISTORY"));
    assert!(text.contains("1. Cara ❤️ Dan"));
    assert!(text.contains("2. Ann ❤️ Ben"));
    assert!(text.contains("Score: 60%"));
    assert!(text.contains("Mood: Playful"));
    let cara = text.find("Cara").unwrap();
    let ann = text.find("Ann").unwrap();
    assert!(cara < ann, "most recent entry must come first");
}

#[test]
fn corrupt_value_is_a_typed_error_and_degrades_to_empty() {
    let backend = MemoryBackend::new();
    backend.put("test_history", "not json at all").unwrap();
    let store = HistoryStore::new(
        backend,
        HistoryConfig {
            storage_key: "test_history".to_string(),
            capacity: 10,
        },
    );

    assert!(matches!(
        store.list(),
        Err(StorageError::Corrupted { .. })
    ));
    assert!(store.list_or_empty().is_empty());
}

#[test]
fn append_replaces_a_corrupt_list() {
    let backend = MemoryBackend::new();
    backend.put("test_history", "{\"oops\": true}").unwrap();
    let store = HistoryStore::new(
        backend,
        HistoryConfig {
            storage_key: "test_history".to_string(),
            capacity: 10,
        },
    );

    store.append(entry("Ann", "Ben", 50)).unwrap();
    let records = store.list().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].left, "Ann");
}

#[test]
fn legacy_main_layout_migrates() {
    let backend = MemoryBackend::new();
    backend
        .put(
            "test_history",
            r#"[{"name1":"Romeo","name2":"Juliet","percent":86,
                "msg":"💕 Soulmates in the making!","mood":"Passionate",
                "tip":"🌹 Leave rose petals on their path","t":1754400000000}]"#,
        )
        .unwrap();
    let store = HistoryStore::new(
        backend,
        HistoryConfig {
            storage_key: "test_history".to_string(),
            capacity: 10,
        },
    );

    let records = store.list().unwrap();
    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.left, "Romeo");
    assert_eq!(r.right, "Juliet");
    assert_eq!(r.percent, 86);
    assert_eq!(r.mood, "Passionate");
    assert_eq!(r.message, "💕 Soulmates in the making!");
    assert_eq!(r.recorded_at.timestamp_millis(), 1754400000000);
}

#[test]
fn legacy_popup_layout_migrates() {
    let backend = MemoryBackend::new();
    backend
        .put(
            "test_history",
            r#"[{"id":1754400000000,"name1":"Ann","name2":"Ben","percentage":140,
                "mood":"Dreamy","description":"so compatible",
                "timestamp":"2026-08-05T12:00:00Z","date":"8/5/2026, 12:00:00"}]"#,
        )
        .unwrap();
    let store = HistoryStore::new(
        backend,
        HistoryConfig {
            storage_key: "test_history".to_string(),
            capacity: 10,
        },
    );

    let records = store.list().unwrap();
    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.left, "Ann");
    // out-of-range stored percent is clamped, not trusted
    assert_eq!(r.percent, 100);
    assert_eq!(r.message, "so compatible");
    assert_eq!(r.recorded_at.to_rfc3339(), "2026-08-05T12:00:00+00:00");
}

#[test]
fn migrated_history_is_rewritten_in_the_envelope() {
    let backend = MemoryBackend::new();
    backend
        .put(
            "test_history",
            r#"[{"name1":"Ann","name2":"Ben","percent":55,"msg":"m","mood":"Playful","t":0}]"#,
        )
        .unwrap();
    let store = HistoryStore::new(
        backend,
        HistoryConfig {
            storage_key: "test_history".to_string(),
            capacity: 10,
        },
    );

    // appending normalizes and persists the canonical envelope
    store.append(entry("Cara", "Dan", 60)).unwrap();
    let raw = store.backend.get("test_history").unwrap().unwrap();
    assert!(raw.contains("\"version\":2"));
    assert!(raw.contains("\"left\":\"Cara\""));
    assert!(raw.contains("\"left\":\"Ann\""));

    let records = store.list().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].left, "Cara");
    assert_eq!(records[1].left, "Ann");
}

#[test]
fn profiles_match_the_widgets() {
    assert_eq!(HistoryConfig::quick().capacity, 10);
    assert_eq!(HistoryConfig::quick().storage_key, DEFAULT_HISTORY_KEY);
    assert_eq!(HistoryConfig::archive().capacity, 50);
    assert_eq!(HistoryConfig::archive().storage_key, ARCHIVE_HISTORY_KEY);
    assert_eq!(HistoryConfig::default(), HistoryConfig::quick());
}
