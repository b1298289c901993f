//! Authentication operations against the backend.
//!
//! `login` is the only operation that writes the session, and it does so
//! before any subscriber hears about it (the store broadcasts after
//! persisting). `logout` is local-first: the server call is best-effort
//! and its failure is reported only after the session is already gone.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{
    Credentials, Envelope, LoginResponse, RegisterInput, ResetPasswordInput, UserProfile,
};
use crate::session::store::SessionStore;
use crate::util::storage::StorageError;

#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
    session: SessionStore,
}

impl AuthApi {
    pub fn new(client: ApiClient, session: SessionStore) -> Self {
        Self { client, session }
    }

    /// `POST api/login`, then persist `{ token, user }` and broadcast.
    ///
    /// # Errors
    ///
    /// On any failure the session is left untouched; server-provided
    /// message/validation details come through verbatim.
    pub async fn login(&self, credentials: &Credentials) -> Result<UserProfile, ApiError> {
        let response: LoginResponse = self.client.post_json("login", credentials).await?;
        store_login(&self.session, &response)?;
        Ok(response.user)
    }

    /// `POST api/register`. Creates the account only — callers chain a
    /// `login` to establish the session.
    ///
    /// # Errors
    ///
    /// Validation details are surfaced verbatim.
    pub async fn register(&self, input: &RegisterInput) -> Result<(), ApiError> {
        self.client
            .post_json::<_, serde_json::Value>("register", input)
            .await?;
        Ok(())
    }

    /// Best-effort `POST api/logout`, then unconditional local teardown.
    ///
    /// # Errors
    ///
    /// A failed server call is returned so the caller may mention it, but
    /// only after the session is already cleared and `SignedOut` has gone
    /// out to subscribers.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.client.post_empty("logout").await;
        self.session.clear_session();
        result
    }

    /// `GET api/me` — fresh server-side profile. Does not touch the
    /// session; refreshing the cache is the caller's decision.
    ///
    /// # Errors
    ///
    /// See the `ApiError` taxonomy.
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        let body: Envelope<UserProfile> = self.client.get_json("me").await?;
        Ok(body.data)
    }

    /// `POST api/forgot-password` with the account email.
    ///
    /// # Errors
    ///
    /// See the `ApiError` taxonomy.
    pub async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        self.client
            .post_json::<_, serde_json::Value>("forgot-password", &serde_json::json!({ "email": email }))
            .await?;
        Ok(())
    }

    /// `POST api/reset-password` with the token pair from the reset link.
    ///
    /// # Errors
    ///
    /// See the `ApiError` taxonomy.
    pub async fn reset_password(&self, input: &ResetPasswordInput) -> Result<(), ApiError> {
        self.client
            .post_json::<_, serde_json::Value>("reset-password", input)
            .await?;
        Ok(())
    }
}

/// Persist a successful login response. Split out so the ordering
/// contract (store first, broadcast second) is testable without a
/// network.
fn store_login(session: &SessionStore, response: &LoginResponse) -> Result<(), StorageError> {
    session.set_session(&response.token, &response.user)
}
