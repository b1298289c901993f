use super::*;
use std::sync::Mutex;

fn recorder(log: &Arc<Mutex<Vec<String>>>, tag: &str) -> AuthCallback {
    let log = Arc::clone(log);
    let tag = tag.to_owned();
    Arc::new(move |change| {
        log.lock().expect("log lock").push(format!("{tag}:{change:?}"));
    })
}

fn emit(subscribers: &Subscribers, change: AuthChange) {
    for cb in subscribers.snapshot() {
        cb(change);
    }
}

#[test]
fn delivery_follows_registration_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut subs = Subscribers::default();
    subs.add(recorder(&log, "a"));
    subs.add(recorder(&log, "b"));

    emit(&subs, AuthChange::SignedIn);

    assert_eq!(
        *log.lock().expect("log lock"),
        vec!["a:SignedIn".to_owned(), "b:SignedIn".to_owned()]
    );
}

#[test]
fn removed_subscriber_gets_nothing() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut subs = Subscribers::default();
    let keep = recorder(&log, "keep");
    let drop = recorder(&log, "drop");
    subs.add(keep);
    let sub = subs.add(drop);
    subs.remove(&sub);

    emit(&subs, AuthChange::SignedOut);

    assert_eq!(*log.lock().expect("log lock"), vec!["keep:SignedOut".to_owned()]);
    assert_eq!(subs.len(), 1);
}

#[test]
fn late_subscriber_misses_past_events() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut subs = Subscribers::default();

    emit(&subs, AuthChange::SignedIn);
    subs.add(recorder(&log, "late"));

    assert!(log.lock().expect("log lock").is_empty());
}

#[test]
fn auth_change_flag() {
    assert!(AuthChange::SignedIn.is_authenticated());
    assert!(!AuthChange::SignedOut.is_authenticated());
}
