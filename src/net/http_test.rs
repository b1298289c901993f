use super::*;
use crate::net::types::{Role, UserProfile};
use crate::session::events::AuthChange;
use crate::util::storage::MemoryStorage;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;

fn signed_in_store() -> SessionStore {
    let store = SessionStore::with_backend(Arc::new(MemoryStorage::default()));
    store
        .set_session(
            "T",
            &UserProfile {
                id: 1,
                name: "A".to_owned(),
                email: "a@example.com".to_owned(),
                role: Role::User,
                created_at: None,
            },
        )
        .expect("set_session");
    store
}

#[test]
fn bearer_header_value() {
    assert_eq!(bearer("T"), "Bearer T");
}

#[test]
fn url_joins_base_and_path_without_doubled_slashes() {
    let client = ApiClient::with_base(SessionStore::with_backend(Arc::new(MemoryStorage::default())), "/api/");
    assert_eq!(client.url("login"), "/api/login");
    assert_eq!(client.url("/vehicules?page=2"), "/api/vehicules?page=2");
}

#[test]
fn unauthorized_clears_session_and_redirects_exactly_once() {
    let store = signed_in_store();
    let redirects = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&redirects);
    let client = ApiClient::new(store.clone())
        .with_unauthorized_action(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

    // Several concurrent requests observing 401 at once.
    client.handle_unauthorized();
    client.handle_unauthorized();
    client.handle_unauthorized();

    assert!(!store.is_authenticated());
    assert_eq!(redirects.load(Ordering::SeqCst), 1);
}

#[test]
fn unauthorized_broadcasts_a_single_sign_out() {
    let store = signed_in_store();
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    store.subscribe(move |change| sink.lock().expect("events lock").push(change));

    let client = ApiClient::new(store).with_unauthorized_action(|| {});
    client.handle_unauthorized();
    client.handle_unauthorized();

    assert_eq!(*events.lock().expect("events lock"), vec![AuthChange::SignedOut]);
}

#[test]
fn clones_share_the_redirect_latch() {
    let store = signed_in_store();
    let redirects = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&redirects);
    let client = ApiClient::new(store).with_unauthorized_action(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let clone = client.clone();

    client.handle_unauthorized();
    clone.handle_unauthorized();

    assert_eq!(redirects.load(Ordering::SeqCst), 1);
}
