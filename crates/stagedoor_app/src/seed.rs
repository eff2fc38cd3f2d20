//! Default-content seeding
//!
//! Writes the compiled-in catalog into storage as real entries, so a fresh
//! deployment starts from the shipped copy instead of an empty store. The
//! verify/status/reset helpers operate on the raw records.

use serde::Deserialize;

use stagedoor_content::ContentStore;
use stagedoor_core::storage::{SharedStorage, StorageError};
use stagedoor_theme::ThemeVariant;

use crate::config::RecordKeys;
use crate::context::SiteContext;

/// Write every cataloged slot into the content store, set the default theme,
/// and leave the admin logged out. Returns the number of seeded entries.
pub fn seed_defaults(ctx: &SiteContext) -> usize {
    let mut count = 0;
    for slot in stagedoor_content::catalog::slot_ids() {
        if let Some(text) = stagedoor_content::catalog::default_for(slot) {
            ctx.content.set_text(slot, text);
            count += 1;
        }
    }

    ctx.theme.set_variant(ThemeVariant::DEFAULT);
    ctx.session.deauthenticate();

    tracing::debug!("seeded {count} content entries");
    count
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdminRecord {
    is_admin: bool,
    #[serde(default)]
    is_edit_mode: bool,
}

/// Check that the three records look like a fresh seed: content present with
/// at least ten entries, default theme, logged-out admin.
pub fn verify_seed(storage: &SharedStorage, keys: &RecordKeys) -> bool {
    let content_ok = match storage.read(&keys.content) {
        Ok(Some(_)) => ContentStore::load(storage.clone(), keys.content.clone()).len() >= 10,
        _ => false,
    };
    if !content_ok {
        tracing::debug!("seed verification failed: content record missing or thin");
        return false;
    }

    let theme_ok = matches!(
        storage.read(&keys.theme),
        Ok(Some(ref raw)) if raw.trim() == ThemeVariant::DEFAULT.id()
    );
    if !theme_ok {
        tracing::debug!("seed verification failed: theme record not the default");
        return false;
    }

    let admin_ok = match storage.read(&keys.admin) {
        Ok(Some(raw)) => serde_json::from_str::<AdminRecord>(&raw)
            .map(|record| !record.is_admin && !record.is_edit_mode)
            .unwrap_or(false),
        _ => false,
    };
    if !admin_ok {
        tracing::debug!("seed verification failed: admin record not logged out");
        return false;
    }

    true
}

/// A snapshot of the stored state, for the status command
#[derive(Debug)]
pub struct SeedStatus {
    pub content_count: usize,
    pub theme: String,
    pub is_admin: bool,
    pub is_edit_mode: bool,
}

pub fn seed_status(storage: &SharedStorage, keys: &RecordKeys) -> SeedStatus {
    let ctx = SiteContext::new(storage.clone(), keys);
    SeedStatus {
        content_count: ctx.content.len(),
        theme: ctx.theme.variant().id().to_string(),
        is_admin: ctx.session.is_admin(),
        is_edit_mode: ctx.session.is_edit_mode(),
    }
}

/// Remove all three durable records
pub fn reset(storage: &SharedStorage, keys: &RecordKeys) -> Result<(), StorageError> {
    storage.remove(&keys.content)?;
    storage.remove(&keys.theme)?;
    storage.remove(&keys.admin)?;
    Ok(())
}
