use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use stagedoor_core::{MemoryStorage, Storage};
use stagedoor_theme::{style_vars, ColorToken, FontToken, ThemeStore, ThemeVariant};

const RECORD: &str = "underground-theme";

#[test]
fn variant_catalog_contains_expected_ids() {
    let mut ids: Vec<&str> = ThemeVariant::all().iter().map(|v| v.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["atmospheric", "modern", "raw"]);
}

#[test]
fn every_variant_has_exactly_one_config() {
    for variant in ThemeVariant::all() {
        let config = variant.config();
        assert_eq!(config.variant, *variant);
        // Deterministic: the same variant always yields the same config
        assert_eq!(variant.config(), config);
    }
}

#[test]
fn variant_ids_round_trip() {
    for variant in ThemeVariant::all() {
        assert_eq!(ThemeVariant::from_id(variant.id()), Some(*variant));
    }
    assert_eq!(ThemeVariant::from_id("brutal"), None);
}

#[test]
fn fresh_store_adopts_default_and_propagates() {
    let store = ThemeStore::load(MemoryStorage::shared(), RECORD);

    assert_eq!(store.variant(), ThemeVariant::Atmospheric);

    // Scope is populated even before any explicit switch
    let scope = store.scope();
    assert_eq!(scope.len(), 6);
    assert_eq!(scope.get(style_vars::BG_PRIMARY), Some("#000000"));
    assert_eq!(scope.get(style_vars::ACCENT_PRIMARY), Some("#8b0000"));
    assert_eq!(scope.get(style_vars::HEADER_FONT), Some("Cinzel"));
    assert_eq!(scope.get(style_vars::BODY_FONT), Some("Inter"));
}

#[test]
fn switching_to_raw_propagates_its_exact_tokens() {
    let storage = MemoryStorage::shared();
    let store = ThemeStore::load(storage.clone(), RECORD);

    store.set_variant(ThemeVariant::Raw);

    assert_eq!(
        store.style_value(style_vars::BG_PRIMARY).as_deref(),
        Some("#1a1a1a")
    );
    assert_eq!(
        store.style_value(style_vars::TEXT_PRIMARY).as_deref(),
        Some("#f5f5f5")
    );
    assert_eq!(
        store.style_value(style_vars::ACCENT_PRIMARY).as_deref(),
        Some("#b8860b")
    );
    assert_eq!(
        store.style_value(style_vars::BG_SECONDARY).as_deref(),
        Some("#2d2d2d")
    );
    assert_eq!(
        store.style_value(style_vars::HEADER_FONT).as_deref(),
        Some("Creepster")
    );
    assert_eq!(
        store.style_value(style_vars::BODY_FONT).as_deref(),
        Some("Oswald")
    );

    // Persisted as the bare variant id
    assert_eq!(storage.read(RECORD).unwrap().as_deref(), Some("raw"));
}

#[test]
fn set_variant_is_idempotent() {
    let store = ThemeStore::load(MemoryStorage::shared(), RECORD);

    store.set_variant(ThemeVariant::Modern);
    let once = store.scope();

    store.set_variant(ThemeVariant::Modern);
    assert_eq!(store.scope(), once);
    assert_eq!(store.variant(), ThemeVariant::Modern);
}

#[test]
fn unknown_variant_id_is_silently_ignored() {
    let store = ThemeStore::load(MemoryStorage::shared(), RECORD);
    store.set_variant(ThemeVariant::Raw);

    store.set_variant_id("vaporwave");

    assert_eq!(store.variant(), ThemeVariant::Raw);
    assert_eq!(
        store.style_value(style_vars::ACCENT_PRIMARY).as_deref(),
        Some("#b8860b")
    );
}

#[test]
fn unrecognized_persisted_record_falls_back_to_default() {
    let storage = MemoryStorage::shared();
    storage.write(RECORD, "synthpop").unwrap();

    let store = ThemeStore::load(storage, RECORD);
    assert_eq!(store.variant(), ThemeVariant::Atmospheric);
    assert_eq!(
        store.style_value(style_vars::BG_PRIMARY).as_deref(),
        Some("#000000")
    );
}

#[test]
fn choice_survives_a_simulated_reload() {
    let storage = MemoryStorage::shared();

    {
        let store = ThemeStore::load(storage.clone(), RECORD);
        store.set_variant(ThemeVariant::Modern);
    }

    let reloaded = ThemeStore::load(storage, RECORD);
    assert_eq!(reloaded.variant(), ThemeVariant::Modern);
    assert_eq!(
        reloaded.style_value(style_vars::ACCENT_PRIMARY).as_deref(),
        Some("#4169e1")
    );
}

#[test]
fn token_accessors_agree_with_scope() {
    let store = ThemeStore::load(MemoryStorage::shared(), RECORD);
    store.set_variant(ThemeVariant::Modern);

    let config = store.config();
    assert_eq!(
        config.colors.get(ColorToken::Accent).to_css_string(),
        store.style_value(style_vars::ACCENT_PRIMARY).unwrap()
    );
    assert_eq!(
        config.typography.get(FontToken::Body),
        store.style_value(style_vars::BODY_FONT).unwrap()
    );
}

#[test]
fn subscribers_hear_variant_switches() {
    let store = ThemeStore::load(MemoryStorage::shared(), RECORD);
    let count = Arc::new(AtomicUsize::new(0));

    let count_clone = count.clone();
    store.subscribe(move || {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });

    store.set_variant(ThemeVariant::Raw);
    // No observable change, no notification
    store.set_variant(ThemeVariant::Raw);
    store.set_variant(ThemeVariant::Modern);

    assert_eq!(count.load(Ordering::SeqCst), 2);
}
