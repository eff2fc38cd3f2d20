use stagedoor_content::{AdminSession, CredentialVerifier, StaticSecret};
use stagedoor_core::{MemoryStorage, SharedStorage, Storage};

const RECORD: &str = "underground-admin";

fn session_with(storage: SharedStorage) -> std::sync::Arc<AdminSession> {
    AdminSession::load(storage, RECORD, Box::new(StaticSecret::site_default()))
}

#[test]
fn fresh_session_is_logged_out() {
    let session = session_with(MemoryStorage::shared());
    assert!(!session.is_admin());
    assert!(!session.is_edit_mode());
}

#[test]
fn authenticate_with_site_secret() {
    let session = session_with(MemoryStorage::shared());

    assert!(session.authenticate("underground666"));
    assert!(session.is_admin());
    assert!(!session.is_edit_mode());
}

#[test]
fn wrong_secret_changes_nothing() {
    let session = session_with(MemoryStorage::shared());

    assert!(!session.authenticate("opensesame"));
    assert!(!session.is_admin());

    // No lockout: the right secret still works afterwards
    assert!(session.authenticate("underground666"));
    assert!(session.is_admin());
}

#[test]
fn toggle_edit_mode_is_a_noop_without_admin() {
    let session = session_with(MemoryStorage::shared());

    for _ in 0..5 {
        session.toggle_edit_mode();
        assert!(!session.is_edit_mode());
    }
}

#[test]
fn toggle_edit_mode_flips_while_admin() {
    let session = session_with(MemoryStorage::shared());
    session.authenticate("underground666");

    session.toggle_edit_mode();
    assert!(session.is_edit_mode());

    session.toggle_edit_mode();
    assert!(!session.is_edit_mode());
}

#[test]
fn deauthenticate_always_clears_both_flags() {
    let session = session_with(MemoryStorage::shared());
    session.authenticate("underground666");
    session.toggle_edit_mode();
    assert!(session.is_edit_mode());

    session.deauthenticate();
    assert!(!session.is_admin());
    assert!(!session.is_edit_mode());

    // Idempotent from any prior state
    session.deauthenticate();
    assert!(!session.is_admin());
    assert!(!session.is_edit_mode());
}

#[test]
fn admin_flag_survives_a_simulated_reload() {
    let storage = MemoryStorage::shared();

    {
        let session = session_with(storage.clone());
        session.authenticate("underground666");
        session.toggle_edit_mode();
    }

    let reloaded = session_with(storage);
    assert!(reloaded.is_admin());
    assert!(reloaded.is_edit_mode());
}

#[test]
fn persisted_edit_mode_without_admin_is_normalized() {
    let storage = MemoryStorage::shared();
    storage
        .write(RECORD, r#"{"isAdmin": false, "isEditMode": true}"#)
        .unwrap();

    let session = session_with(storage);
    assert!(!session.is_admin());
    assert!(!session.is_edit_mode());
}

#[test]
fn legacy_bare_boolean_record_is_accepted() {
    let storage = MemoryStorage::shared();
    storage.write(RECORD, "true").unwrap();

    let session = session_with(storage);
    assert!(session.is_admin());
    assert!(!session.is_edit_mode());
}

#[test]
fn malformed_record_means_logged_out() {
    let storage = MemoryStorage::shared();
    storage.write(RECORD, "???").unwrap();

    let session = session_with(storage);
    assert!(!session.is_admin());
    assert!(!session.is_edit_mode());
}

#[test]
fn custom_verifier_is_honored() {
    struct AlwaysNo;
    impl CredentialVerifier for AlwaysNo {
        fn verify(&self, _candidate: &str) -> bool {
            false
        }
    }

    let session = AdminSession::load(MemoryStorage::shared(), RECORD, Box::new(AlwaysNo));
    assert!(!session.authenticate("underground666"));
    assert!(!session.is_admin());
}
