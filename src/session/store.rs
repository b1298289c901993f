//! The session store: one place that owns the persisted token and the
//! cached user profile.
//!
//! TRUST MODEL
//! ===========
//! `is_authenticated` is a trust-on-presence check — the token is opaque
//! and never validated locally. The server is the judge; a 401 response
//! tears the session down (see `net::http`).
//!
//! Every mutation that changes the signed-in/signed-out answer broadcasts
//! an `AuthChange` *after* the stored state is updated, so a subscriber
//! re-reading the store from inside its callback sees the new state.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::net::types::UserProfile;
use crate::session::events::{AuthChange, AuthCallback, Subscribers, Subscription};
use crate::util::storage::{self, StorageBackend, StorageError};

const TOKEN_KEY: &str = "fleetdesk_token";
const USER_KEY: &str = "fleetdesk_user";

/// Shared handle to the session. Cheap to clone; all clones observe the
/// same state, so it can be handed out through Leptos context.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

struct Inner {
    backend: Arc<dyn StorageBackend>,
    subscribers: Mutex<Subscribers>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_backend(storage::default_backend())
    }

    pub fn with_backend(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            inner: Arc::new(Inner {
                backend,
                subscribers: Mutex::new(Subscribers::default()),
            }),
        }
    }

    /// Persist a fresh session and broadcast `SignedIn`.
    ///
    /// # Errors
    ///
    /// Only the storage medium failing produces an error; nothing is
    /// broadcast in that case.
    pub fn set_session(&self, token: &str, user: &UserProfile) -> Result<(), StorageError> {
        let user_json =
            serde_json::to_string(user).map_err(|e| StorageError::new(e.to_string()))?;
        self.inner.backend.write(TOKEN_KEY, token)?;
        self.inner.backend.write(USER_KEY, &user_json)?;
        self.emit(AuthChange::SignedIn);
        Ok(())
    }

    /// Rewrite the cached profile without touching the token, then
    /// re-broadcast so session-dependent chrome refreshes. Used when the
    /// signed-in user edits their own account.
    ///
    /// # Errors
    ///
    /// Storage failure, as for `set_session`.
    pub fn replace_user(&self, user: &UserProfile) -> Result<(), StorageError> {
        if !self.is_authenticated() {
            return Ok(());
        }
        let user_json =
            serde_json::to_string(user).map_err(|e| StorageError::new(e.to_string()))?;
        self.inner.backend.write(USER_KEY, &user_json)?;
        self.emit(AuthChange::SignedIn);
        Ok(())
    }

    /// Drop the session. Idempotent: clearing an empty session does
    /// nothing and broadcasts nothing.
    pub fn clear_session(&self) {
        let had_session = self.is_authenticated();
        self.inner.backend.remove(TOKEN_KEY);
        self.inner.backend.remove(USER_KEY);
        if had_session {
            self.emit(AuthChange::SignedOut);
        }
    }

    /// Token presence. Purely local, no validation.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.backend.read(TOKEN_KEY)
    }

    /// The cached profile from the last login. A corrupted stored value
    /// reads as absent, never as an error.
    pub fn user(&self) -> Option<UserProfile> {
        let raw = self.inner.backend.read(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(AuthChange) + Send + Sync + 'static,
    {
        self.lock_subscribers().add(Arc::new(callback) as AuthCallback)
    }

    pub fn unsubscribe(&self, subscription: &Subscription) {
        self.lock_subscribers().remove(subscription);
    }

    fn emit(&self, change: AuthChange) {
        // Snapshot first: callbacks may re-enter the store.
        let callbacks = self.lock_subscribers().snapshot();
        for callback in callbacks {
            callback(change);
        }
    }

    fn lock_subscribers(&self) -> std::sync::MutexGuard<'_, Subscribers> {
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
