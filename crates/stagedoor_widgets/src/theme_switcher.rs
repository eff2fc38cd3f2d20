//! Theme switcher
//!
//! Lists the variant catalog and forwards selections to the theme store.
//! Visible to every visitor; nothing here is gated on the admin session.

use std::sync::Arc;

use stagedoor_theme::{ThemeStore, ThemeVariant};

/// One row in the switcher
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwitcherOption {
    pub variant: ThemeVariant,
    pub label: &'static str,
    pub active: bool,
}

pub struct ThemeSwitcher {
    store: Arc<ThemeStore>,
}

impl ThemeSwitcher {
    pub fn new(store: Arc<ThemeStore>) -> Self {
        Self { store }
    }

    /// The full catalog, with the active variant marked
    pub fn options(&self) -> Vec<SwitcherOption> {
        let active = self.store.variant();
        ThemeVariant::all()
            .iter()
            .map(|&variant| SwitcherOption {
                variant,
                label: variant.display_name(),
                active: variant == active,
            })
            .collect()
    }

    /// Switch to a variant
    pub fn select(&self, variant: ThemeVariant) {
        self.store.set_variant(variant);
    }

    /// Switch by id; unknown ids are ignored by the store
    pub fn select_id(&self, id: &str) {
        self.store.set_variant_id(id);
    }
}
