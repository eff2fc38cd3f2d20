//! Content store
//!
//! Owns the slot id → entry mapping. All mutation goes through [`set`]
//! (or [`reset`]); every write persists the entire mapping to one durable
//! record and then notifies subscribers so mounted fields re-resolve.
//!
//! In-memory state is the source of truth for the session: a failed
//! persistence write is logged and the mapping keeps the new value.
//!
//! [`set`]: ContentStore::set
//! [`reset`]: ContentStore::reset

use rustc_hash::FxHashMap;
use std::sync::{Arc, RwLock};

use stagedoor_core::notify::{Subscribers, SubscriptionId};
use stagedoor_core::storage::SharedStorage;

use crate::catalog;
use crate::entry::{ContentEntry, ContentValue, SlotId, WireEntry};

pub struct ContentStore {
    record_key: String,
    storage: SharedStorage,
    entries: RwLock<FxHashMap<SlotId, ContentEntry>>,
    subscribers: Subscribers,
}

impl ContentStore {
    /// Load the store from its durable record.
    ///
    /// A missing or malformed record is "no content": the store starts
    /// empty and startup never fails on bad data.
    pub fn load(storage: SharedStorage, record_key: impl Into<String>) -> Arc<Self> {
        let record_key = record_key.into();
        let entries = match storage.read(&record_key) {
            Ok(Some(raw)) => parse_record(&raw),
            Ok(None) => FxHashMap::default(),
            Err(err) => {
                tracing::warn!("content record unreadable, starting empty: {err}");
                FxHashMap::default()
            }
        };

        tracing::debug!("content store loaded with {} entries", entries.len());
        Arc::new(Self {
            record_key,
            storage,
            entries: RwLock::new(entries),
            subscribers: Subscribers::new(),
        })
    }

    /// The stored value for a slot, or `None` if absent.
    ///
    /// Never fails; callers apply their own default on `None`.
    pub fn get(&self, slot: &str) -> Option<ContentValue> {
        self.entries
            .read()
            .unwrap()
            .get(slot)
            .map(|entry| entry.value.clone())
    }

    /// The stored text for a slot, if it holds a text value
    pub fn get_text(&self, slot: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap()
            .get(slot)
            .and_then(|entry| entry.value.as_text().map(str::to_owned))
    }

    /// The value a field displays: stored text if present, else the
    /// compiled-in default, else the empty string.
    pub fn resolve(&self, slot: &str) -> String {
        self.get_text(slot)
            .or_else(|| catalog::default_for(slot).map(str::to_owned))
            .unwrap_or_default()
    }

    /// Upsert an entry, persist the whole mapping, notify subscribers.
    ///
    /// Writes to one slot never touch any other slot's entry; last write
    /// wins.
    pub fn set(&self, slot: &str, value: ContentValue) {
        {
            let mut entries = self.entries.write().unwrap();
            entries.insert(slot.to_string(), ContentEntry::new(slot, value));
        }
        tracing::debug!("content slot `{slot}` updated");
        self.persist();
        self.subscribers.notify();
    }

    /// Upsert a text entry
    pub fn set_text(&self, slot: &str, text: impl Into<String>) {
        self.set(slot, ContentValue::Text(text.into()));
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// Clear every entry and remove the durable record
    pub fn reset(&self) {
        self.entries.write().unwrap().clear();
        if let Err(err) = self.storage.remove(&self.record_key) {
            tracing::warn!("failed to remove content record: {err}");
        }
        self.subscribers.notify();
    }

    /// Register a change callback fired after every committed write
    pub fn subscribe<F: Fn() + Send + Sync + 'static>(&self, callback: F) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }

    fn persist(&self) {
        let serialized = {
            let entries = self.entries.read().unwrap();
            let wire: FxHashMap<&str, WireEntry> = entries
                .iter()
                .map(|(id, entry)| (id.as_str(), WireEntry::from_entry(entry)))
                .collect();
            serde_json::to_string(&wire)
        };

        match serialized {
            Ok(raw) => {
                // In-memory state stays authoritative even if this fails
                if let Err(err) = self.storage.write(&self.record_key, &raw) {
                    tracing::warn!("failed to persist content record: {err}");
                }
            }
            Err(err) => tracing::warn!("failed to serialize content record: {err}"),
        }
    }
}

/// Parse the persisted mapping, skipping entries whose payload does not
/// match their declared kind.
fn parse_record(raw: &str) -> FxHashMap<SlotId, ContentEntry> {
    let wire: FxHashMap<String, WireEntry> = match serde_json::from_str(raw) {
        Ok(wire) => wire,
        Err(err) => {
            tracing::debug!("malformed content record treated as empty: {err}");
            return FxHashMap::default();
        }
    };

    wire.into_iter()
        .filter_map(|(id, entry)| {
            let entry = entry.into_entry()?;
            Some((id, entry))
        })
        .collect()
}
