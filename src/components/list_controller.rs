//! Generic list controller: the load/delete/refresh cycle shared by all
//! three resource screens.
//!
//! REFRESH AFTER MUTATION
//! ======================
//! A successful delete never edits the local collection — it re-fetches
//! the current page so the table always shows server truth. Failed loads
//! keep whatever was on screen and surface a retry affordance; nothing
//! retries automatically.
//!
//! All signal writes from async continuations go through `try_update`, so
//! a response landing after the view unmounted is dropped instead of
//! touching a dead signal.

use leptos::prelude::*;

use crate::net::http::ApiClient;
use crate::net::resources::ListResource;
use crate::state::list::{ListState, Notice};
use crate::util::browser;

#[cfg(feature = "hydrate")]
const NOTICE_TTL: std::time::Duration = std::time::Duration::from_secs(3);

/// User-facing strings for one resource's list screen.
#[derive(Clone, Copy)]
pub struct ListText {
    pub load_failed: &'static str,
    pub confirm_delete: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
}

pub struct ListController<R: ListResource> {
    pub state: RwSignal<ListState<R>>,
    client: ApiClient,
    text: ListText,
}

impl<R: ListResource> Clone for ListController<R> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            client: self.client.clone(),
            text: self.text,
        }
    }
}

impl<R: ListResource> ListController<R> {
    pub fn new(client: ApiClient, text: ListText) -> Self {
        Self {
            state: RwSignal::new(ListState::default()),
            client,
            text,
        }
    }

    /// Fetch one page (1-indexed) and replace the collection when it
    /// lands. Superseded responses are discarded by the state's request
    /// token.
    pub fn load(&self, page: u32) {
        #[cfg(feature = "hydrate")]
        {
            let Some(token) = self.state.try_update(ListState::begin_load) else {
                return;
            };
            let client = self.client.clone();
            let state = self.state;
            let load_failed = self.text.load_failed;
            leptos::task::spawn_local(async move {
                match crate::net::resources::fetch_page::<R>(&client, page).await {
                    Ok(fetched) => {
                        state.try_update(|s| s.apply_page(token, fetched));
                    }
                    // Session teardown and redirect already happened in
                    // the HTTP layer.
                    Err(crate::net::error::ApiError::Unauthorized) => {}
                    Err(err) => {
                        leptos::logging::warn!("{} load failed: {err}", R::BASE);
                        state.try_update(|s| s.apply_error(token, load_failed));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = page;
        }
    }

    /// Re-fetch whatever page is currently displayed.
    pub fn reload(&self) {
        let page = self.state.with_untracked(|s| s.current_page);
        self.load(page);
    }

    /// Confirm with the user, delete, then resynchronize from the server.
    pub fn delete(&self, id: i64) {
        if !browser::confirm(self.text.confirm_delete) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let this = self.clone();
            leptos::task::spawn_local(async move {
                match crate::net::resources::delete::<R>(&this.client, id).await {
                    Ok(()) => {
                        this.reload();
                        this.flash(Notice::success(this.text.deleted));
                    }
                    Err(crate::net::error::ApiError::Unauthorized) => {}
                    Err(err) => {
                        leptos::logging::warn!("{} delete failed: {err}", R::BASE);
                        this.flash(Notice::error(this.text.delete_failed));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }

    /// Surface a page-level rule violation through the same transient
    /// banner as a failed delete.
    pub fn notify_error(&self, text: impl Into<String>) {
        self.flash(Notice::error(text));
    }

    fn flash(&self, notice: Notice) {
        let Some(seq) = self.state.try_update(|s| s.set_notice(notice)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(NOTICE_TTL).await;
                state.try_update(|s| s.clear_notice(seq));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = seq;
        }
    }
}
