use reelbase_catalog::types::{PublicUser, Role};
use reelbase_db::*;

fn seeded() -> Catalog<MemoryStore> {
    let mut catalog = Catalog::open(MemoryStore::new()).unwrap();
    catalog.initialize().unwrap();
    catalog
}

// ── Accounts ────────────────────────────────────────────────────────────────

#[test]
fn default_accounts_authenticate() {
    let catalog = seeded();
    let admin = catalog.authenticate("admin", "admin").unwrap();
    assert_eq!(admin.role, Role::Admin);
    let user = catalog.authenticate("user", "user").unwrap();
    assert_eq!(user.role, Role::User);

    assert!(catalog.authenticate("admin", "wrong").is_none());
    assert!(catalog.authenticate("ghost", "admin").is_none());
}

#[test]
fn register_then_authenticate() {
    let mut catalog = seeded();
    let created = catalog.register("dana", "s3cret", Role::User).unwrap();
    assert_eq!(created.username, "dana");

    let found = catalog.authenticate("dana", "s3cret").unwrap();
    assert_eq!(
        found,
        PublicUser {
            username: "dana".to_string(),
            role: Role::User
        }
    );
    assert!(catalog.authenticate("dana", "S3cret").is_none());
}

#[test]
fn register_rejects_duplicates_and_blanks() {
    let mut catalog = seeded();
    assert!(matches!(
        catalog.register("admin", "x", Role::User).unwrap_err(),
        CatalogError::DuplicateKey { .. }
    ));
    assert!(matches!(
        catalog.register("   ", "x", Role::User).unwrap_err(),
        CatalogError::InvalidInput(_)
    ));
    assert_eq!(catalog.list_users().len(), 2);
}

#[test]
fn register_keeps_username_as_given() {
    let mut catalog = seeded();
    let created = catalog.register(" dana ", "pw", Role::User).unwrap();
    assert_eq!(created.username, " dana ");

    assert_eq!(
        catalog.authenticate(" dana ", "pw"),
        Some(PublicUser {
            username: " dana ".to_string(),
            role: Role::User
        })
    );
    assert!(catalog.authenticate("dana", "pw").is_none());
}

#[test]
fn register_accepts_empty_password() {
    let mut catalog = seeded();
    catalog.register("erin", "", Role::Admin).unwrap();
    let found = catalog.authenticate("erin", "").unwrap();
    assert_eq!(found.role, Role::Admin);
    assert!(catalog.authenticate("erin", " ").is_none());
}

#[test]
fn stored_hash_is_never_the_password() {
    let mut catalog = seeded();
    catalog.register("dana", "s3cret", Role::User).unwrap();
    let raw = catalog.store().get("users").unwrap().unwrap();
    assert!(!raw.contains("s3cret"));
    assert!(raw.contains(&hash_password("s3cret")));
    assert!(raw.contains("\"passwordHash\""));
}

#[test]
fn role_changes_and_deletion() {
    let mut catalog = seeded();
    catalog.set_role("user", Role::Admin).unwrap();
    assert_eq!(catalog.user("user").unwrap().role, Role::Admin);

    catalog.delete_user("user").unwrap();
    assert!(catalog.user("user").is_none());
    assert!(matches!(
        catalog.delete_user("user").unwrap_err(),
        CatalogError::NotFound { .. }
    ));
    assert!(matches!(
        catalog.set_role("user", Role::User).unwrap_err(),
        CatalogError::NotFound { .. }
    ));
}

// ── Session ─────────────────────────────────────────────────────────────────

#[test]
fn fresh_store_has_no_session() {
    let catalog = seeded();
    let session = Session::restore(&catalog).unwrap();
    assert_eq!(session, Session::Unauthenticated);
    assert!(matches!(
        session.require_user().unwrap_err(),
        CatalogError::NotAuthenticated
    ));
}

#[test]
fn login_persists_and_restores() {
    let mut catalog = seeded();
    let mut session = Session::default();
    session.login(&mut catalog, "admin", "admin").unwrap();
    assert!(session.is_authenticated());

    let restored = Session::restore(&catalog).unwrap();
    assert_eq!(restored.user().unwrap().username, "admin");
    assert!(restored.require_admin("add shows").is_ok());
}

#[test]
fn failed_login_keeps_previous_state() {
    let mut catalog = seeded();
    let mut session = Session::default();
    let err = session.login(&mut catalog, "admin", "nope").unwrap_err();
    assert!(matches!(err, CatalogError::InvalidCredentials));
    assert!(!session.is_authenticated());
    assert!(catalog.store().get(SESSION_KEY).unwrap().is_none());
}

#[test]
fn logout_clears_persisted_session() {
    let mut catalog = seeded();
    let mut session = Session::default();
    session.login(&mut catalog, "user", "user").unwrap();
    session.logout(&mut catalog).unwrap();

    assert!(!session.is_authenticated());
    assert_eq!(Session::restore(&catalog).unwrap(), Session::Unauthenticated);
}

#[test]
fn register_signs_in() {
    let mut catalog = seeded();
    let mut session = Session::default();
    let user = session
        .register(&mut catalog, "newbie", "pw", Role::User)
        .unwrap()
        .clone();
    assert_eq!(user.username, "newbie");
    assert_eq!(
        Session::restore(&catalog).unwrap().user().unwrap().username,
        "newbie"
    );
}

#[test]
fn non_admin_is_denied_writes() {
    let mut catalog = seeded();
    let mut session = Session::default();
    session.login(&mut catalog, "user", "user").unwrap();

    assert!(session.require_user().is_ok());
    let err = session.require_admin("delete episodes").unwrap_err();
    assert!(matches!(err, CatalogError::PermissionDenied(ref a) if a == "delete episodes"));
}

#[test]
fn admin_cannot_target_self() {
    let mut catalog = seeded();
    let mut session = Session::default();
    session.login(&mut catalog, "admin", "admin").unwrap();

    assert!(matches!(
        session.ensure_not_self("admin", "delete").unwrap_err(),
        CatalogError::SelfModification(_)
    ));
    assert!(session.ensure_not_self("user", "delete").is_ok());
}

#[test]
fn restore_uses_current_role() {
    let mut catalog = seeded();
    let mut session = Session::default();
    session.login(&mut catalog, "user", "user").unwrap();
    catalog.set_role("user", Role::Admin).unwrap();

    let restored = Session::restore(&catalog).unwrap();
    assert!(restored.require_admin("edit").is_ok());
}

#[test]
fn restore_drops_session_of_deleted_user() {
    let mut catalog = seeded();
    let mut session = Session::default();
    session.login(&mut catalog, "user", "user").unwrap();
    catalog.delete_user("user").unwrap();

    assert_eq!(Session::restore(&catalog).unwrap(), Session::Unauthenticated);
}

#[test]
fn corrupt_session_is_ignored() {
    let mut catalog = seeded();
    catalog
        .store_mut()
        .put(SESSION_KEY, "{not json".to_string())
        .unwrap();
    assert_eq!(Session::restore(&catalog).unwrap(), Session::Unauthenticated);
}
