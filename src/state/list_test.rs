use super::*;
use crate::net::types::PageMeta;

fn page(items: &[&str], current_page: u32, last_page: u32) -> Page<String> {
    Page {
        data: items.iter().map(|s| (*s).to_owned()).collect(),
        meta: PageMeta { current_page, last_page },
    }
}

#[test]
fn default_state_is_empty_first_page() {
    let state = ListState::<String>::default();
    assert!(state.items.is_empty());
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages, 0);
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(state.notice.is_none());
}

#[test]
fn a_landed_page_replaces_everything_from_server_meta() {
    let mut state = ListState::default();
    let token = state.begin_load();
    assert!(state.loading);

    assert!(state.apply_page(token, page(&["a", "b"], 2, 5)));

    assert_eq!(state.items, vec!["a".to_owned(), "b".to_owned()]);
    // Server meta is authoritative, whatever the caller asked for.
    assert_eq!(state.current_page, 2);
    assert_eq!(state.total_pages, 5);
    assert!(!state.loading);
}

#[test]
fn a_late_response_never_overwrites_a_newer_one() {
    let mut state = ListState::default();
    let stale = state.begin_load();
    let fresh = state.begin_load();

    assert!(state.apply_page(fresh, page(&["new"], 2, 3)));
    // The slow first response arrives afterwards and is dropped.
    assert!(!state.apply_page(stale, page(&["old"], 1, 3)));

    assert_eq!(state.items, vec!["new".to_owned()]);
    assert_eq!(state.current_page, 2);
}

#[test]
fn a_late_error_is_also_dropped() {
    let mut state = ListState::default();
    let stale = state.begin_load();
    let fresh = state.begin_load();

    assert!(state.apply_page(fresh, page(&["kept"], 1, 1)));
    assert!(!state.apply_error(stale, "too late"));
    assert!(state.error.is_none());
}

#[test]
fn a_failed_load_keeps_previous_items_and_sets_the_error() {
    let mut state = ListState::default();
    let token = state.begin_load();
    assert!(state.apply_page(token, page(&["a"], 1, 2)));

    let token = state.begin_load();
    assert!(state.apply_error(token, "Impossible de charger la liste."));

    assert_eq!(state.items, vec!["a".to_owned()]);
    assert_eq!(state.error.as_deref(), Some("Impossible de charger la liste."));
    assert!(!state.loading);
}

#[test]
fn a_successful_reload_clears_the_error() {
    let mut state = ListState::default();
    let token = state.begin_load();
    assert!(state.apply_error(token, "down"));

    let token = state.begin_load();
    assert!(state.apply_page(token, page(&["a"], 1, 1)));
    assert!(state.error.is_none());
}

#[test]
fn pager_bounds_are_one_indexed() {
    let mut state = ListState::default();
    let token = state.begin_load();
    assert!(state.apply_page(token, page(&["a"], 1, 3)));
    assert!(!state.has_prev());
    assert!(state.has_next());

    let token = state.begin_load();
    assert!(state.apply_page(token, page(&["b"], 3, 3)));
    assert!(state.has_prev());
    assert!(!state.has_next());
}

#[test]
fn notice_expiry_only_clears_its_own_notice() {
    let mut state = ListState::<String>::default();
    let first = state.set_notice(Notice::success("Supprimé."));
    let second = state.set_notice(Notice::error("Échec."));

    // The first notice's timer fires after it was superseded.
    state.clear_notice(first);
    assert_eq!(state.notice, Some(Notice::error("Échec.")));

    state.clear_notice(second);
    assert!(state.notice.is_none());
}
