//! Paginated list state shared by every resource screen.
//!
//! ONE PAGE OF SERVER TRUTH
//! ========================
//! `items` holds exactly the page the server last returned — a new fetch
//! replaces it wholesale, and `current_page`/`total_pages` always come
//! from the response's `meta`. Nothing is accumulated or speculatively
//! edited client-side.
//!
//! STALENESS
//! =========
//! Every load gets a token from `begin_load`; a response only lands if
//! its token is still the newest. A slow page-1 response can therefore
//! never overwrite the page-2 data the user has since navigated to.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use crate::net::types::Page;

/// Identifies one load request for staleness checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Transient feedback after a mutation, cleared after a short delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub total_pages: u32,
    pub loading: bool,
    /// Sticky load failure; stays up until a retry succeeds.
    pub error: Option<String>,
    pub notice: Option<Notice>,
    seq: u64,
    notice_seq: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_pages: 0,
            loading: false,
            error: None,
            notice: None,
            seq: 0,
            notice_seq: 0,
        }
    }
}

impl<T> ListState<T> {
    /// Start a load; any response carrying an older token is discarded.
    pub fn begin_load(&mut self) -> LoadToken {
        self.seq += 1;
        self.loading = true;
        LoadToken(self.seq)
    }

    /// Land a successful page. Returns `false` (and changes nothing) when
    /// a newer load has been issued since `token`.
    pub fn apply_page(&mut self, token: LoadToken, page: Page<T>) -> bool {
        if token.0 != self.seq {
            return false;
        }
        self.items = page.data;
        self.current_page = page.meta.current_page;
        self.total_pages = page.meta.last_page;
        self.loading = false;
        self.error = None;
        true
    }

    /// Land a failed load. Previously displayed items stay in place; the
    /// error is what offers the manual retry.
    pub fn apply_error(&mut self, token: LoadToken, message: impl Into<String>) -> bool {
        if token.0 != self.seq {
            return false;
        }
        self.loading = false;
        self.error = Some(message.into());
        true
    }

    /// Post a notice, superseding any current one. The returned sequence
    /// lets the expiry timer clear only its own notice.
    pub fn set_notice(&mut self, notice: Notice) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(notice);
        self.notice_seq
    }

    pub fn clear_notice(&mut self, seq: u64) {
        if self.notice_seq == seq {
            self.notice = None;
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}
