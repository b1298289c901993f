#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;
use crate::session::store::SessionStore;

/// Snapshot of the session for rendering.
///
/// The root `App` rebuilds this from the session store on every auth
/// change, so session-dependent chrome only ever reads a signal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub authenticated: bool,
}

impl AuthState {
    pub fn from_session(session: &SessionStore) -> Self {
        Self {
            user: session.user(),
            authenticated: session.is_authenticated(),
        }
    }
}
