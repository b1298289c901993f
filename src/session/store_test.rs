use super::*;
use crate::net::types::Role;
use crate::util::storage::MemoryStorage;
use std::sync::Mutex;

fn admin() -> UserProfile {
    UserProfile {
        id: 1,
        name: "Admin".to_owned(),
        email: "admin@example.com".to_owned(),
        role: Role::Admin,
        created_at: None,
    }
}

fn store_with_memory() -> (SessionStore, Arc<MemoryStorage>) {
    let backend = Arc::new(MemoryStorage::default());
    let store = SessionStore::with_backend(backend.clone());
    (store, backend)
}

fn record_events(store: &SessionStore) -> Arc<Mutex<Vec<AuthChange>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    store.subscribe(move |change| sink.lock().expect("events lock").push(change));
    events
}

/// Storage double whose writes always fail.
struct BrokenStorage;

impl crate::util::storage::StorageBackend for BrokenStorage {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::new("quota exceeded"))
    }

    fn remove(&self, _key: &str) {}
}

#[test]
fn fresh_store_is_signed_out() {
    let (store, _) = store_with_memory();
    assert!(!store.is_authenticated());
    assert!(store.token().is_none());
    assert!(store.user().is_none());
}

#[test]
fn login_persists_token_and_user_and_broadcasts_once() {
    let (store, _) = store_with_memory();
    let events = record_events(&store);

    store.set_session("T", &admin()).expect("set_session");

    assert!(store.is_authenticated());
    assert_eq!(store.token().as_deref(), Some("T"));
    assert_eq!(store.user().map(|u| u.role), Some(Role::Admin));
    assert_eq!(*events.lock().expect("events lock"), vec![AuthChange::SignedIn]);
}

#[test]
fn login_then_logout_leaves_nothing_behind() {
    let (store, _) = store_with_memory();
    let events = record_events(&store);

    store.set_session("T", &admin()).expect("set_session");
    store.clear_session();

    assert!(!store.is_authenticated());
    assert!(store.user().is_none());
    assert_eq!(
        *events.lock().expect("events lock"),
        vec![AuthChange::SignedIn, AuthChange::SignedOut]
    );
}

#[test]
fn clearing_an_empty_session_is_a_silent_no_op() {
    let (store, _) = store_with_memory();
    let events = record_events(&store);

    store.clear_session();
    store.clear_session();

    assert!(events.lock().expect("events lock").is_empty());
}

#[test]
fn corrupted_user_json_reads_as_absent() {
    let (store, backend) = store_with_memory();
    backend.write("fleetdesk_token", "T").expect("token write");
    backend
        .write("fleetdesk_user", "{not valid json")
        .expect("user write");

    assert!(store.user().is_none());
    // Authentication is governed solely by token presence.
    assert!(store.is_authenticated());
}

#[test]
fn storage_failure_propagates_and_broadcasts_nothing() {
    let store = SessionStore::with_backend(Arc::new(BrokenStorage));
    let events = record_events(&store);

    let result = store.set_session("T", &admin());

    assert!(result.is_err());
    assert!(!store.is_authenticated());
    assert!(events.lock().expect("events lock").is_empty());
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let (store, _) = store_with_memory();
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let sub = store.subscribe(move |change| sink.lock().expect("events lock").push(change));

    store.set_session("T", &admin()).expect("set_session");
    store.unsubscribe(&sub);
    store.clear_session();

    assert_eq!(*events.lock().expect("events lock"), vec![AuthChange::SignedIn]);
}

#[test]
fn subscriber_sees_new_state_when_notified() {
    let (store, _) = store_with_memory();
    let observed = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&observed);
    let probe = store.clone();
    store.subscribe(move |change| {
        sink.lock()
            .expect("observed lock")
            .push((change, probe.is_authenticated()));
    });

    store.set_session("T", &admin()).expect("set_session");
    store.clear_session();

    assert_eq!(
        *observed.lock().expect("observed lock"),
        vec![(AuthChange::SignedIn, true), (AuthChange::SignedOut, false)]
    );
}

#[test]
fn replace_user_keeps_token_and_rebroadcasts() {
    let (store, _) = store_with_memory();
    store.set_session("T", &admin()).expect("set_session");
    let events = record_events(&store);

    let mut renamed = admin();
    renamed.name = "Renamed".to_owned();
    store.replace_user(&renamed).expect("replace_user");

    assert_eq!(store.token().as_deref(), Some("T"));
    assert_eq!(store.user().map(|u| u.name), Some("Renamed".to_owned()));
    assert_eq!(*events.lock().expect("events lock"), vec![AuthChange::SignedIn]);
}

#[test]
fn replace_user_without_a_session_does_nothing() {
    let (store, _) = store_with_memory();
    let events = record_events(&store);

    store.replace_user(&admin()).expect("replace_user");

    assert!(store.user().is_none());
    assert!(events.lock().expect("events lock").is_empty());
}
