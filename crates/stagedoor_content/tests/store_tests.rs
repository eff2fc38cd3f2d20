use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use stagedoor_content::{catalog, ContentStore, ContentValue};
use stagedoor_core::{MemoryStorage, Storage};

const RECORD: &str = "underground-content";

#[test]
fn unwritten_slot_resolves_to_compiled_default() {
    let store = ContentStore::load(MemoryStorage::shared(), RECORD);

    assert_eq!(store.resolve("hero-title"), "CRIMSON THRONE");
    assert_eq!(
        store.resolve("hero-tagline"),
        catalog::default_for("hero-tagline").unwrap()
    );
    assert!(store.get("hero-title").is_none());
}

#[test]
fn uncataloged_slot_resolves_to_empty_string() {
    let store = ContentStore::load(MemoryStorage::shared(), RECORD);
    assert_eq!(store.resolve("no-such-slot"), "");
}

#[test]
fn set_then_resolve_returns_new_value() {
    let store = ContentStore::load(MemoryStorage::shared(), RECORD);

    store.set_text("hero-title", "NEW TITLE");
    assert_eq!(store.resolve("hero-title"), "NEW TITLE");
    assert_eq!(
        store.get("hero-title"),
        Some(ContentValue::Text("NEW TITLE".into()))
    );
}

#[test]
fn writes_survive_a_simulated_reload() {
    let storage = MemoryStorage::shared();

    {
        let store = ContentStore::load(storage.clone(), RECORD);
        store.set_text("hero-title", "NEW TITLE");
        store.set_text("tour-description", "All shows cancelled");
    }

    // A fresh store over the same storage handle is the reloaded page
    let reloaded = ContentStore::load(storage, RECORD);
    assert_eq!(reloaded.resolve("hero-title"), "NEW TITLE");
    assert_eq!(reloaded.resolve("tour-description"), "All shows cancelled");
    assert_eq!(reloaded.len(), 2);
}

#[test]
fn slots_are_independent() {
    let store = ContentStore::load(MemoryStorage::shared(), RECORD);

    store.set_text("member-1-name", "WRAITH");
    store.set_text("member-2-name", "GLOOM");
    store.set_text("member-1-name", "SPECTRE");

    assert_eq!(store.resolve("member-1-name"), "SPECTRE");
    assert_eq!(store.resolve("member-2-name"), "GLOOM");
}

#[test]
fn malformed_record_starts_empty() {
    let storage = MemoryStorage::shared();
    storage.write(RECORD, "{ not json").unwrap();

    let store = ContentStore::load(storage, RECORD);
    assert!(store.is_empty());
    assert_eq!(store.resolve("hero-title"), "CRIMSON THRONE");
}

#[test]
fn entry_with_mismatched_payload_is_skipped() {
    let storage = MemoryStorage::shared();
    storage
        .write(
            RECORD,
            r#"{
                "hero-title": {"id": "hero-title", "type": "text", "content": "KEPT", "lastModified": 1},
                "about-bio": {"id": "about-bio", "type": "text", "content": 42, "lastModified": 1}
            }"#,
        )
        .unwrap();

    let store = ContentStore::load(storage, RECORD);
    assert_eq!(store.len(), 1);
    assert_eq!(store.resolve("hero-title"), "KEPT");
    // Falls back to the compiled default
    assert!(store.resolve("about-bio").starts_with("Forged in the shadows"));
}

#[test]
fn reset_clears_entries_and_record() {
    let storage = MemoryStorage::shared();
    let store = ContentStore::load(storage.clone(), RECORD);

    store.set_text("hero-title", "NEW TITLE");
    store.reset();

    assert!(store.is_empty());
    assert_eq!(store.resolve("hero-title"), "CRIMSON THRONE");
    assert!(storage.read(RECORD).unwrap().is_none());
}

#[test]
fn subscribers_hear_every_write() {
    let store = ContentStore::load(MemoryStorage::shared(), RECORD);
    let count = Arc::new(AtomicUsize::new(0));

    let count_clone = count.clone();
    let id = store.subscribe(move || {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });

    store.set_text("hero-title", "ONE");
    store.set_text("hero-title", "TWO");
    assert_eq!(count.load(Ordering::SeqCst), 2);

    store.unsubscribe(id);
    store.set_text("hero-title", "THREE");
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn write_failure_keeps_in_memory_state() {
    struct ReadOnly;

    impl Storage for ReadOnly {
        fn read(&self, _key: &str) -> Result<Option<String>, stagedoor_core::StorageError> {
            Ok(None)
        }
        fn write(&self, key: &str, _value: &str) -> Result<(), stagedoor_core::StorageError> {
            Err(stagedoor_core::StorageError::Write {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "quota exceeded"),
            })
        }
        fn remove(&self, _key: &str) -> Result<(), stagedoor_core::StorageError> {
            Ok(())
        }
    }

    let store = ContentStore::load(Arc::new(ReadOnly), RECORD);
    store.set_text("hero-title", "STILL HERE");

    // The session keeps the value even though the write failed
    assert_eq!(store.resolve("hero-title"), "STILL HERE");
}
