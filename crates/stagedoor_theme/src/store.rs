//! Theme store
//!
//! Owns the active variant and the shared style-variable scope every
//! component styles itself from. Switching variants persists the choice and
//! rewrites the whole scope; load propagates unconditionally so the scope
//! is consistent with the active variant even on first visit.

use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

use stagedoor_core::notify::{Subscribers, SubscriptionId};
use stagedoor_core::storage::SharedStorage;

use crate::variants::{ThemeConfig, ThemeVariant};

/// Style variable names, matching the custom properties the original site
/// set on its document root.
pub mod style_vars {
    pub const BG_PRIMARY: &str = "--bg-primary";
    pub const TEXT_PRIMARY: &str = "--text-primary";
    pub const ACCENT_PRIMARY: &str = "--accent-primary";
    pub const BG_SECONDARY: &str = "--bg-secondary";
    pub const HEADER_FONT: &str = "--header-font";
    pub const BODY_FONT: &str = "--body-font";
}

/// The global style-token scope: variable name → value, in declaration
/// order. Components read these instead of holding per-component color or
/// font logic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleScope {
    vars: IndexMap<String, String>,
}

impl StyleScope {
    /// Value of one style variable
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Iterate variables in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    fn set(&mut self, name: &str, value: impl Into<String>) {
        self.vars.insert(name.to_string(), value.into());
    }
}

/// Build the full scope for one variant's config
fn scope_for(config: &ThemeConfig) -> StyleScope {
    let mut scope = StyleScope::default();
    scope.set(style_vars::BG_PRIMARY, config.colors.background.to_css_string());
    scope.set(style_vars::TEXT_PRIMARY, config.colors.text.to_css_string());
    scope.set(style_vars::ACCENT_PRIMARY, config.colors.accent.to_css_string());
    scope.set(style_vars::BG_SECONDARY, config.colors.secondary.to_css_string());
    scope.set(style_vars::HEADER_FONT, config.typography.header_font);
    scope.set(style_vars::BODY_FONT, config.typography.body_font);
    scope
}

pub struct ThemeStore {
    record_key: String,
    storage: SharedStorage,
    variant: RwLock<ThemeVariant>,
    scope: RwLock<StyleScope>,
    subscribers: Subscribers,
}

impl ThemeStore {
    /// Load the store from its durable record.
    ///
    /// A missing or unrecognized persisted id falls back to the default
    /// variant; propagation then runs unconditionally so the scope always
    /// matches the active variant.
    pub fn load(storage: SharedStorage, record_key: impl Into<String>) -> Arc<Self> {
        let record_key = record_key.into();
        let variant = match storage.read(&record_key) {
            Ok(Some(raw)) => match ThemeVariant::from_id(raw.trim()) {
                Some(variant) => variant,
                None => {
                    tracing::debug!("unrecognized theme record `{raw}`, using default");
                    ThemeVariant::DEFAULT
                }
            },
            Ok(None) => ThemeVariant::DEFAULT,
            Err(err) => {
                tracing::warn!("theme record unreadable, using default: {err}");
                ThemeVariant::DEFAULT
            }
        };

        tracing::debug!("theme store loaded with variant {variant:?}");
        Arc::new(Self {
            record_key,
            storage,
            variant: RwLock::new(variant),
            scope: RwLock::new(scope_for(variant.config())),
            subscribers: Subscribers::new(),
        })
    }

    /// The active variant
    pub fn variant(&self) -> ThemeVariant {
        *self.variant.read().unwrap()
    }

    /// The active variant's static config
    pub fn config(&self) -> &'static ThemeConfig {
        self.variant().config()
    }

    /// Switch the active variant.
    ///
    /// Persists the choice and propagates the variant's tokens into the
    /// style scope. Idempotent: switching to the current variant re-persists
    /// the id but changes nothing observable.
    pub fn set_variant(&self, variant: ThemeVariant) {
        if let Err(err) = self.storage.write(&self.record_key, variant.id()) {
            tracing::warn!("failed to persist theme record: {err}");
        }

        {
            let mut current = self.variant.write().unwrap();
            if *current == variant {
                return;
            }
            tracing::debug!("theme switching from {:?} to {:?}", *current, variant);
            *current = variant;
        }

        *self.scope.write().unwrap() = scope_for(variant.config());
        self.subscribers.notify();
    }

    /// Switch by persisted id; anything outside the catalog is silently
    /// ignored (the switcher only offers valid choices).
    pub fn set_variant_id(&self, id: &str) {
        match ThemeVariant::from_id(id) {
            Some(variant) => self.set_variant(variant),
            None => tracing::debug!("ignoring unknown theme variant `{id}`"),
        }
    }

    /// Snapshot of the current style scope
    pub fn scope(&self) -> StyleScope {
        self.scope.read().unwrap().clone()
    }

    /// Value of one style variable in the current scope
    pub fn style_value(&self, name: &str) -> Option<String> {
        self.scope
            .read()
            .unwrap()
            .get(name)
            .map(str::to_owned)
    }

    /// Register a change callback fired after every variant switch
    pub fn subscribe<F: Fn() + Send + Sync + 'static>(&self, callback: F) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }
}
