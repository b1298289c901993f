use super::*;
use crate::net::types::Role;
use crate::util::storage::MemoryStorage;
use std::sync::Arc;

#[test]
fn auth_state_default_is_signed_out() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.authenticated);
}

#[test]
fn from_session_reflects_the_store() {
    let session = SessionStore::with_backend(Arc::new(MemoryStorage::default()));
    assert_eq!(AuthState::from_session(&session), AuthState::default());

    session
        .set_session(
            "T",
            &UserProfile {
                id: 7,
                name: "Mina".to_owned(),
                email: "mina@example.com".to_owned(),
                role: Role::Manager,
                created_at: None,
            },
        )
        .expect("set_session");

    let state = AuthState::from_session(&session);
    assert!(state.authenticated);
    assert_eq!(state.user.map(|u| u.id), Some(7));
}
