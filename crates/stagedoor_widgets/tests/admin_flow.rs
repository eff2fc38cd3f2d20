use std::sync::Arc;

use stagedoor_content::{AdminSession, StaticSecret};
use stagedoor_core::{MemoryStorage, SharedStorage};
use stagedoor_theme::{ThemeStore, ThemeVariant};
use stagedoor_widgets::admin_panel::REJECTION_NOTICE;
use stagedoor_widgets::{AdminPanel, PanelView, ThemeSwitcher};

fn panel_fixtures(storage: SharedStorage) -> (Arc<AdminSession>, Arc<ThemeStore>) {
    let session = AdminSession::load(
        storage.clone(),
        "underground-admin",
        Box::new(StaticSecret::site_default()),
    );
    let theme = ThemeStore::load(storage, "underground-theme");
    (session, theme)
}

#[test]
fn login_flow_reaches_the_panel() {
    let (session, theme) = panel_fixtures(MemoryStorage::shared());
    let mut panel = AdminPanel::new(session.clone(), theme);

    assert_eq!(panel.view(), PanelView::Gear);

    panel.open_login();
    assert_eq!(panel.view(), PanelView::Login);

    panel.type_password("underground666");
    assert!(panel.submit_login());
    assert_eq!(panel.view(), PanelView::Panel);
    assert!(session.is_admin());
    assert!(panel.notice().is_none());
}

#[test]
fn rejected_password_shows_inline_notice() {
    let (session, theme) = panel_fixtures(MemoryStorage::shared());
    let mut panel = AdminPanel::new(session.clone(), theme);

    panel.open_login();
    panel.type_password("guessing");
    assert!(!panel.submit_login());

    // Prompt stays open with the notice; session unchanged
    assert_eq!(panel.view(), PanelView::Login);
    assert_eq!(panel.notice(), Some(REJECTION_NOTICE));
    assert!(!session.is_admin());

    // No lockout: the next attempt can still succeed
    panel.type_password("underground666");
    assert!(panel.submit_login());
    assert_eq!(panel.view(), PanelView::Panel);
}

#[test]
fn dismiss_clears_the_prompt() {
    let (session, theme) = panel_fixtures(MemoryStorage::shared());
    let mut panel = AdminPanel::new(session, theme);

    panel.open_login();
    panel.type_password("half-typed");
    panel.dismiss_login();

    assert_eq!(panel.view(), PanelView::Gear);

    // Reopening starts from a clean buffer
    panel.open_login();
    panel.type_password("underground666");
    assert!(panel.submit_login());
}

#[test]
fn edit_mode_toggle_and_label() {
    let (session, theme) = panel_fixtures(MemoryStorage::shared());
    let mut panel = AdminPanel::new(session.clone(), theme);

    panel.open_login();
    panel.type_password("underground666");
    panel.submit_login();

    assert_eq!(panel.edit_mode_label(), "Edit Content");
    panel.toggle_edit_mode();
    assert!(session.is_edit_mode());
    assert_eq!(panel.edit_mode_label(), "Exit Edit Mode");
}

#[test]
fn logout_clears_session_and_collapses() {
    let (session, theme) = panel_fixtures(MemoryStorage::shared());
    let mut panel = AdminPanel::new(session.clone(), theme);

    panel.open_login();
    panel.type_password("underground666");
    panel.submit_login();
    panel.toggle_edit_mode();

    panel.logout();
    assert_eq!(panel.view(), PanelView::Gear);
    assert!(!session.is_admin());
    assert!(!session.is_edit_mode());
}

#[test]
fn persisted_admin_skips_the_prompt() {
    let storage = MemoryStorage::shared();
    {
        let (session, _) = panel_fixtures(storage.clone());
        session.authenticate("underground666");
    }

    let (session, theme) = panel_fixtures(storage);
    let panel = AdminPanel::new(session, theme);
    assert_eq!(panel.view(), PanelView::Panel);
}

#[test]
fn switcher_lists_catalog_and_marks_active() {
    let (_, theme) = panel_fixtures(MemoryStorage::shared());
    let switcher = ThemeSwitcher::new(theme.clone());

    let options = switcher.options();
    assert_eq!(options.len(), 3);
    assert_eq!(options[0].label, "Atmospheric");
    assert!(options[0].active);
    assert!(!options[1].active);

    switcher.select(ThemeVariant::Raw);
    let options = switcher.options();
    assert!(options.iter().find(|o| o.variant == ThemeVariant::Raw).unwrap().active);
    assert_eq!(theme.variant(), ThemeVariant::Raw);
}

#[test]
fn switcher_ignores_unknown_ids() {
    let (_, theme) = panel_fixtures(MemoryStorage::shared());
    let switcher = ThemeSwitcher::new(theme.clone());

    switcher.select_id("raw");
    switcher.select_id("djent");

    assert_eq!(theme.variant(), ThemeVariant::Raw);
}

#[test]
fn panel_theme_selection_reaches_the_store() {
    let (session, theme) = panel_fixtures(MemoryStorage::shared());
    let mut panel = AdminPanel::new(session, theme.clone());

    panel.open_login();
    panel.type_password("underground666");
    panel.submit_login();

    assert_eq!(panel.theme_options().len(), 3);
    panel.select_theme(ThemeVariant::Modern);
    assert_eq!(theme.variant(), ThemeVariant::Modern);
}
