//! HTTP client wrapper.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side:
//! stubs returning errors, since the API is only reachable from the
//! browser.
//!
//! CREDENTIALS
//! ===========
//! The `Authorization` header is derived from the session store when the
//! request is sent, not when the call is constructed, so a token that
//! changed in between is still honored.
//!
//! 401 HANDLING
//! ============
//! An unauthorized response invalidates everything the current view is
//! showing. The wrapper clears the session and forces one hard navigation
//! to the login page — once, no matter how many in-flight requests come
//! back 401 together — and hands `ApiError::Unauthorized` to the caller,
//! which treats it as already-handled.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::ApiError;
use crate::session::store::SessionStore;
use crate::util::browser;

const DEFAULT_BASE: &str = "/api";
#[cfg(feature = "hydrate")]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Shared REST client. Clones share the session handle and the 401
/// redirect latch.
#[derive(Clone)]
pub struct ApiClient {
    session: SessionStore,
    base: String,
    on_unauthorized: Arc<dyn Fn() + Send + Sync>,
    redirected: Arc<AtomicBool>,
}

impl ApiClient {
    pub fn new(session: SessionStore) -> Self {
        Self::with_base(session, DEFAULT_BASE)
    }

    pub fn with_base(session: SessionStore, base: impl Into<String>) -> Self {
        Self {
            session,
            base: base.into(),
            on_unauthorized: Arc::new(|| browser::force_redirect("/login")),
            redirected: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Replace the forced-navigation action. Tests use this to observe the
    /// redirect instead of touching `window.location`.
    pub fn with_unauthorized_action(
        mut self,
        action: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.on_unauthorized = Arc::new(action);
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// GET `path`, expecting a JSON body.
    ///
    /// # Errors
    ///
    /// See the `ApiError` taxonomy; 401 clears the session first.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self
                .authorize(gloo_net::http::Request::get(&self.url(path)))
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let response = self.send(request).await?;
            self.read_json(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(Self::offline())
        }
    }

    /// POST a JSON body to `path`, expecting a JSON body back.
    ///
    /// # Errors
    ///
    /// See the `ApiError` taxonomy.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let request = self
                .authorize(gloo_net::http::Request::post(&self.url(path)))
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let response = self.send(request).await?;
            self.read_json(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(Self::offline())
        }
    }

    /// POST with an empty body, ignoring any response payload.
    ///
    /// # Errors
    ///
    /// See the `ApiError` taxonomy.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self
                .authorize(gloo_net::http::Request::post(&self.url(path)))
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let response = self.send(request).await?;
            self.read_empty(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(Self::offline())
        }
    }

    /// PUT a JSON body to `path`, expecting a JSON body back.
    ///
    /// # Errors
    ///
    /// See the `ApiError` taxonomy.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let request = self
                .authorize(gloo_net::http::Request::put(&self.url(path)))
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let response = self.send(request).await?;
            self.read_json(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(Self::offline())
        }
    }

    /// DELETE `path`, ignoring any response payload.
    ///
    /// # Errors
    ///
    /// See the `ApiError` taxonomy.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self
                .authorize(gloo_net::http::Request::delete(&self.url(path)))
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let response = self.send(request).await?;
            self.read_empty(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(Self::offline())
        }
    }

    #[cfg(feature = "hydrate")]
    fn authorize(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        // Read the store at send time; the token may have changed since
        // the caller was constructed.
        match self.session.token() {
            Some(token) => builder.header("Authorization", &bearer(&token)),
            None => builder,
        }
    }

    #[cfg(feature = "hydrate")]
    async fn send(
        &self,
        request: gloo_net::http::Request,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use futures::future::{Either, select};

        let response = Box::pin(request.send());
        let timeout = Box::pin(gloo_timers::future::sleep(REQUEST_TIMEOUT));
        match select(response, timeout).await {
            Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string())),
            Either::Right(((), _)) => Err(ApiError::Network("request timed out".to_owned())),
        }
    }

    #[cfg(feature = "hydrate")]
    async fn read_json<T: DeserializeOwned>(
        &self,
        response: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        if response.status() == 401 {
            return Err(self.unauthorized());
        }
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(response.status(), &body));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    #[cfg(feature = "hydrate")]
    async fn read_empty(&self, response: gloo_net::http::Response) -> Result<(), ApiError> {
        if response.status() == 401 {
            return Err(self.unauthorized());
        }
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(response.status(), &body));
        }
        Ok(())
    }

    #[cfg(feature = "hydrate")]
    fn unauthorized(&self) -> ApiError {
        self.handle_unauthorized();
        ApiError::Unauthorized
    }

    fn handle_unauthorized(&self) {
        self.session.clear_session();
        if !self.redirected.swap(true, Ordering::SeqCst) {
            (self.on_unauthorized)();
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    #[cfg(not(feature = "hydrate"))]
    fn offline() -> ApiError {
        ApiError::Network("network is not available outside the browser".to_owned())
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
