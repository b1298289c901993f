use super::*;
use crate::net::types::Role;
use crate::session::events::AuthChange;
use crate::util::storage::MemoryStorage;
use std::sync::{Arc, Mutex};

fn login_response() -> LoginResponse {
    LoginResponse {
        token: "T".to_owned(),
        user: UserProfile {
            id: 1,
            name: "Admin".to_owned(),
            email: "user@example.com".to_owned(),
            role: Role::Admin,
            created_at: None,
        },
    }
}

fn store() -> SessionStore {
    SessionStore::with_backend(Arc::new(MemoryStorage::default()))
}

fn auth_over(session: &SessionStore) -> AuthApi {
    let client = ApiClient::new(session.clone()).with_unauthorized_action(|| {});
    AuthApi::new(client, session.clone())
}

#[test]
fn successful_login_stores_session_and_notifies_once() {
    let session = store();
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    session.subscribe(move |change| sink.lock().expect("events lock").push(change));

    store_login(&session, &login_response()).expect("store_login");

    assert!(session.is_authenticated());
    assert_eq!(session.user().map(|u| u.role), Some(Role::Admin));
    assert_eq!(*events.lock().expect("events lock"), vec![AuthChange::SignedIn]);
}

#[test]
fn failed_login_leaves_session_untouched() {
    let session = store();
    let auth = auth_over(&session);

    // Native builds have no network; the call fails before any session
    // write could happen.
    let result = futures::executor::block_on(auth.login(&Credentials {
        email: "user@example.com".to_owned(),
        password: "secret".to_owned(),
    }));

    assert!(result.is_err());
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
}

#[test]
fn logout_clears_locally_even_when_the_server_is_unreachable() {
    let session = store();
    store_login(&session, &login_response()).expect("store_login");
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    session.subscribe(move |change| sink.lock().expect("events lock").push(change));

    let auth = auth_over(&session);
    let result = futures::executor::block_on(auth.logout());

    // The network failure is still reported to the caller...
    assert!(result.is_err());
    // ...but the local session is gone and subscribers were told.
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
    assert_eq!(*events.lock().expect("events lock"), vec![AuthChange::SignedOut]);
}
