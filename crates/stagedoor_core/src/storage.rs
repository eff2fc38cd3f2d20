//! Durable key-value storage abstraction
//!
//! The site persists three independent logical records (content, theme,
//! admin) under fixed key names. This module is the only place that touches
//! the durable medium; the stores above it treat a missing or unreadable
//! record as "no data" and carry on from defaults.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Errors from the durable storage medium
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read record `{key}`: {source}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write record `{key}`: {source}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove record `{key}`: {source}")]
    Remove {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to create storage root `{root}`: {source}")]
    CreateRoot {
        root: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Synchronous durable key-value storage.
///
/// Reads distinguish "no record" (`Ok(None)`) from medium failure (`Err`);
/// the stores degrade to defaults on either, but only the latter is logged
/// as a warning.
pub trait Storage: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle to a storage backend
pub type SharedStorage = Arc<dyn Storage>;

/// In-memory storage.
///
/// The test double, and the reload-simulation medium: two contexts built on
/// one handle observe each other's records.
#[derive(Default)]
pub struct MemoryStorage {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap in a shared handle
    pub fn shared() -> SharedStorage {
        Arc::new(Self::new())
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.records.lock().unwrap().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.records
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.records.lock().unwrap().remove(key);
        Ok(())
    }
}

/// File-backed storage: one file per record key under a root directory.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a storage root directory
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|source| StorageError::CreateRoot {
            root: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.record_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::write(self.record_path(key), value).map_err(|source| StorageError::Write {
            key: key.to_string(),
            source,
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.record_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Remove {
                key: key.to_string(),
                source,
            }),
        }
    }
}
