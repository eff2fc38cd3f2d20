//! Site context
//!
//! Builds the three stores over one storage handle in dependency order and
//! hands out editable fields wired to them. Theme propagation happens inside
//! the theme store's load, so by the time `new` returns the style scope is
//! consistent with the active variant.

use std::sync::Arc;

use anyhow::Result;
use stagedoor_content::{catalog, AdminSession, ContentStore, StaticSecret};
use stagedoor_core::storage::{FileStorage, SharedStorage};
use stagedoor_theme::ThemeStore;
use stagedoor_widgets::EditableText;

use crate::config::{RecordKeys, SiteConfig};

pub struct SiteContext {
    pub content: Arc<ContentStore>,
    pub session: Arc<AdminSession>,
    pub theme: Arc<ThemeStore>,
}

impl SiteContext {
    /// Wire the stores over a shared storage handle
    pub fn new(storage: SharedStorage, keys: &RecordKeys) -> Self {
        let content = ContentStore::load(storage.clone(), keys.content.clone());
        let session = AdminSession::load(
            storage.clone(),
            keys.admin.clone(),
            Box::new(StaticSecret::site_default()),
        );
        let theme = ThemeStore::load(storage, keys.theme.clone());

        Self {
            content,
            session,
            theme,
        }
    }

    /// Wire the stores with the default record keys
    pub fn with_defaults(storage: SharedStorage) -> Self {
        Self::new(storage, &RecordKeys::default())
    }

    /// Open a site from its configuration, with file-backed storage rooted
    /// in `site_dir`
    pub fn open(site_dir: &std::path::Path, config: &SiteConfig) -> Result<Self> {
        let storage: SharedStorage =
            Arc::new(FileStorage::open(site_dir.join(&config.storage.root))?);
        Ok(Self::new(storage, &config.records))
    }

    /// An editable field for a slot, seeded with its compiled-in default
    pub fn field(&self, slot: &str) -> EditableText {
        EditableText::new(
            slot,
            catalog::default_for(slot).unwrap_or(""),
            self.content.clone(),
            self.session.clone(),
        )
    }
}
