//! Content entries for editable slots

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Stable string key identifying one editable content location on the page.
///
/// The namespace is owned by the content store; any string is accepted, and
/// unknown ids silently resolve to their (possibly empty) default.
pub type SlotId = String;

/// The supported content kinds.
///
/// Only `Text` is exercised by the site today; the others are carried so the
/// payload stays a closed tagged type rather than an opaque blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Image,
    Gallery,
}

/// A typed content payload
#[derive(Clone, Debug, PartialEq)]
pub enum ContentValue {
    Text(String),
    Image(String),
    Gallery(Vec<String>),
}

impl ContentValue {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentValue::Text(_) => ContentKind::Text,
            ContentValue::Image(_) => ContentKind::Image,
            ContentValue::Gallery(_) => ContentKind::Gallery,
        }
    }

    /// The text payload, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// One stored content entry.
///
/// Created on the first commit for a slot id, overwritten (not versioned) on
/// later commits, and only ever cleared by a full store reset.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentEntry {
    pub id: SlotId,
    pub value: ContentValue,
    /// Milliseconds since the Unix epoch at the last commit
    pub last_modified: u64,
}

impl ContentEntry {
    /// Create an entry stamped with the current time
    pub fn new(id: impl Into<SlotId>, value: ContentValue) -> Self {
        Self {
            id: id.into(),
            value,
            last_modified: now_ms(),
        }
    }

    pub fn kind(&self) -> ContentKind {
        self.value.kind()
    }
}

/// Milliseconds since the Unix epoch
pub(crate) fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Wire shape of one persisted entry.
///
/// Field names match the record the original site wrote, so an existing
/// durable record stays readable.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub content: serde_json::Value,
    #[serde(default)]
    pub last_modified: u64,
}

impl WireEntry {
    pub fn from_entry(entry: &ContentEntry) -> Self {
        let content = match &entry.value {
            ContentValue::Text(text) => serde_json::Value::String(text.clone()),
            ContentValue::Image(source) => serde_json::Value::String(source.clone()),
            ContentValue::Gallery(sources) => serde_json::Value::Array(
                sources
                    .iter()
                    .map(|s| serde_json::Value::String(s.clone()))
                    .collect(),
            ),
        };
        Self {
            id: entry.id.clone(),
            kind: entry.kind(),
            content,
            last_modified: entry.last_modified,
        }
    }

    /// Convert back to a typed entry; `None` when the payload does not match
    /// the declared kind (the caller skips such entries).
    pub fn into_entry(self) -> Option<ContentEntry> {
        let value = match (self.kind, self.content) {
            (ContentKind::Text, serde_json::Value::String(text)) => ContentValue::Text(text),
            (ContentKind::Image, serde_json::Value::String(source)) => ContentValue::Image(source),
            (ContentKind::Gallery, serde_json::Value::Array(items)) => {
                let sources = items
                    .into_iter()
                    .map(|item| match item {
                        serde_json::Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect::<Option<Vec<_>>>()?;
                ContentValue::Gallery(sources)
            }
            _ => return None,
        };
        Some(ContentEntry {
            id: self.id,
            value,
            last_modified: self.last_modified,
        })
    }
}
