use super::*;
use crate::net::types::UserProfile;
use crate::util::storage::{MemoryStorage, StorageBackend};
use std::sync::Arc;

fn session_with(role: Role) -> SessionStore {
    let session = SessionStore::with_backend(Arc::new(MemoryStorage::default()));
    session
        .set_session(
            "T",
            &UserProfile {
                id: 1,
                name: "U".to_owned(),
                email: "u@example.com".to_owned(),
                role,
                created_at: None,
            },
        )
        .expect("set_session");
    session
}

#[test]
fn unauthenticated_always_goes_to_login() {
    let session = SessionStore::with_backend(Arc::new(MemoryStorage::default()));
    assert_eq!(evaluate(&session, None), GuardOutcome::RedirectLogin);
    assert_eq!(
        evaluate(&session, Some(Role::Admin)),
        GuardOutcome::RedirectLogin
    );
}

#[test]
fn authenticated_without_role_requirement_is_allowed() {
    let session = session_with(Role::User);
    assert_eq!(evaluate(&session, None), GuardOutcome::Allow);
}

#[test]
fn matching_role_is_allowed() {
    let session = session_with(Role::Admin);
    assert_eq!(evaluate(&session, Some(Role::Admin)), GuardOutcome::Allow);
}

#[test]
fn role_mismatch_redirects_home_not_to_login() {
    let session = session_with(Role::Manager);
    assert_eq!(
        evaluate(&session, Some(Role::Admin)),
        GuardOutcome::RedirectHome
    );
}

#[test]
fn roles_have_no_hierarchy() {
    // An admin does not implicitly satisfy a manager requirement.
    let session = session_with(Role::Admin);
    assert_eq!(
        evaluate(&session, Some(Role::Manager)),
        GuardOutcome::RedirectHome
    );
}

#[test]
fn unreadable_cached_user_passes_the_role_check() {
    let backend = Arc::new(MemoryStorage::default());
    backend.write("fleetdesk_token", "T").expect("token write");
    backend
        .write("fleetdesk_user", "{corrupted")
        .expect("user write");
    let session = SessionStore::with_backend(backend);

    assert_eq!(evaluate(&session, Some(Role::Admin)), GuardOutcome::Allow);
}
