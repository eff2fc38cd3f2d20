//! Stagedoor Content System
//!
//! The editable-content half of the site core:
//!
//! - **ContentStore**: slot id → entry mapping with durable persistence
//! - **Default catalog**: compiled-in copy for every slot the site renders
//! - **AdminSession**: the admin/edit-mode flags that gate all writes
//!
//! # Overview
//!
//! Content lives in a single mapping from slot id to [`ContentEntry`],
//! serialized in full to one durable record on every write. A slot with no
//! entry resolves to its compiled-in default; a slot with no default
//! resolves to the empty string. Neither case is an error.
//!
//! Write access is gated by the [`AdminSession`]: the editable fields only
//! enter their editing state while `is_edit_mode` is true, and edit mode
//! itself requires an authenticated admin.
//!
//! # Quick Start
//!
//! ```rust
//! use stagedoor_content::{AdminSession, ContentStore, StaticSecret};
//! use stagedoor_core::MemoryStorage;
//!
//! let storage = MemoryStorage::shared();
//! let content = ContentStore::load(storage.clone(), "underground-content");
//! let session = AdminSession::load(
//!     storage,
//!     "underground-admin",
//!     Box::new(StaticSecret::site_default()),
//! );
//!
//! assert!(session.authenticate("underground666"));
//! session.toggle_edit_mode();
//!
//! content.set_text("hero-title", "NEW TITLE");
//! assert_eq!(content.resolve("hero-title"), "NEW TITLE");
//! ```

pub mod catalog;
pub mod entry;
pub mod session;
pub mod store;

pub use entry::{ContentEntry, ContentKind, ContentValue, SlotId};
pub use session::{AdminSession, CredentialVerifier, StaticSecret};
pub use store::ContentStore;
