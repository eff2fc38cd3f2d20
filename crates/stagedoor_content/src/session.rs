//! Admin session
//!
//! Holds the two flags that gate every content write: `is_admin` and
//! `is_edit_mode`. Edit mode is never true without admin; the invariant is
//! enforced at every entry point: [`toggle_edit_mode`] requires admin,
//! [`deauthenticate`] forces edit mode off, and a persisted record claiming
//! edit mode without admin is normalized on load.
//!
//! [`toggle_edit_mode`]: AdminSession::toggle_edit_mode
//! [`deauthenticate`]: AdminSession::deauthenticate

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

use stagedoor_core::notify::{Subscribers, SubscriptionId};
use stagedoor_core::storage::SharedStorage;

/// Credential check seam.
///
/// The session only cares about the yes/no answer; how verification happens
/// is pluggable so a real deployment can put a proper credential boundary
/// behind the same state machine.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, candidate: &str) -> bool;
}

/// Compiled-in fixed secret.
///
/// Plaintext comparison, no lockout, no rate limiting. A known weakness of
/// the original site, carried as-is.
pub struct StaticSecret {
    secret: &'static str,
}

impl StaticSecret {
    pub const fn new(secret: &'static str) -> Self {
        Self { secret }
    }

    /// The secret the site ships with
    pub const fn site_default() -> Self {
        Self::new("underground666")
    }
}

impl CredentialVerifier for StaticSecret {
    fn verify(&self, candidate: &str) -> bool {
        candidate == self.secret
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct SessionFlags {
    is_admin: bool,
    is_edit_mode: bool,
}

/// Wire shape of the persisted admin record
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSession {
    is_admin: bool,
    #[serde(default)]
    is_edit_mode: bool,
}

pub struct AdminSession {
    record_key: String,
    storage: SharedStorage,
    verifier: Box<dyn CredentialVerifier>,
    flags: RwLock<SessionFlags>,
    subscribers: Subscribers,
}

impl AdminSession {
    /// Load the session from its durable record.
    ///
    /// Missing or malformed records mean a logged-out session. A record
    /// with `isEditMode: true` but `isAdmin: false` violates the session
    /// invariant and is normalized to edit mode off.
    pub fn load(
        storage: SharedStorage,
        record_key: impl Into<String>,
        verifier: Box<dyn CredentialVerifier>,
    ) -> Arc<Self> {
        let record_key = record_key.into();
        let flags = match storage.read(&record_key) {
            Ok(Some(raw)) => parse_record(&raw),
            Ok(None) => SessionFlags::default(),
            Err(err) => {
                tracing::warn!("admin record unreadable, starting logged out: {err}");
                SessionFlags::default()
            }
        };

        Arc::new(Self {
            record_key,
            storage,
            verifier,
            flags: RwLock::new(flags),
            subscribers: Subscribers::new(),
        })
    }

    pub fn is_admin(&self) -> bool {
        self.flags.read().unwrap().is_admin
    }

    pub fn is_edit_mode(&self) -> bool {
        self.flags.read().unwrap().is_edit_mode
    }

    /// Check a candidate secret.
    ///
    /// On success sets `is_admin` and persists; on failure leaves state
    /// unchanged and returns false to the caller.
    pub fn authenticate(&self, candidate: &str) -> bool {
        if !self.verifier.verify(candidate) {
            tracing::debug!("admin authentication rejected");
            return false;
        }

        self.flags.write().unwrap().is_admin = true;
        tracing::debug!("admin authenticated");
        self.persist();
        self.subscribers.notify();
        true
    }

    /// Flip edit mode, only while an admin is authenticated
    pub fn toggle_edit_mode(&self) {
        {
            let mut flags = self.flags.write().unwrap();
            if !flags.is_admin {
                return;
            }
            flags.is_edit_mode = !flags.is_edit_mode;
            tracing::debug!("edit mode now {}", flags.is_edit_mode);
        }
        self.persist();
        self.subscribers.notify();
    }

    /// Log out: clears both flags atomically
    pub fn deauthenticate(&self) {
        {
            let mut flags = self.flags.write().unwrap();
            flags.is_admin = false;
            flags.is_edit_mode = false;
        }
        tracing::debug!("admin logged out");
        self.persist();
        self.subscribers.notify();
    }

    /// Register a change callback fired after every committed flag change
    pub fn subscribe<F: Fn() + Send + Sync + 'static>(&self, callback: F) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }

    fn persist(&self) {
        let flags = *self.flags.read().unwrap();
        let wire = WireSession {
            is_admin: flags.is_admin,
            is_edit_mode: flags.is_edit_mode,
        };
        match serde_json::to_string(&wire) {
            Ok(raw) => {
                if let Err(err) = self.storage.write(&self.record_key, &raw) {
                    tracing::warn!("failed to persist admin record: {err}");
                }
            }
            Err(err) => tracing::warn!("failed to serialize admin record: {err}"),
        }
    }
}

fn parse_record(raw: &str) -> SessionFlags {
    // Legacy records held a bare boolean for is_admin
    if let Ok(wire) = serde_json::from_str::<WireSession>(raw) {
        return SessionFlags {
            is_admin: wire.is_admin,
            // Invariant: edit mode never survives without admin
            is_edit_mode: wire.is_edit_mode && wire.is_admin,
        };
    }
    if let Ok(is_admin) = raw.trim().parse::<bool>() {
        return SessionFlags {
            is_admin,
            is_edit_mode: false,
        };
    }

    tracing::debug!("malformed admin record treated as logged out");
    SessionFlags::default()
}
