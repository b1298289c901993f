//! Generic CRUD over the fleet resources.
//!
//! Each listable resource supplies its endpoint base and an id accessor;
//! the page/detail/mutation calls are written once. Paths are relative to
//! the client's `api/` base.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{Envelope, Intervention, Page, UserProfile, Vehicle};

/// A resource served as a paginated collection.
pub trait ListResource: Clone + DeserializeOwned + Send + Sync + 'static {
    /// Endpoint base under `api/`.
    const BASE: &'static str;

    fn id(&self) -> i64;
}

impl ListResource for Vehicle {
    const BASE: &'static str = "vehicules";

    fn id(&self) -> i64 {
        self.id
    }
}

impl ListResource for Intervention {
    const BASE: &'static str = "interventions";

    fn id(&self) -> i64 {
        self.id
    }
}

impl ListResource for UserProfile {
    const BASE: &'static str = "users";

    fn id(&self) -> i64 {
        self.id
    }
}

/// Fetch one page (1-indexed).
///
/// # Errors
///
/// See the `ApiError` taxonomy.
pub async fn fetch_page<R: ListResource>(
    client: &ApiClient,
    page: u32,
) -> Result<Page<R>, ApiError> {
    client.get_json(&format!("{}?page={page}", R::BASE)).await
}

/// Fetch a single entity.
///
/// # Errors
///
/// See the `ApiError` taxonomy.
pub async fn fetch_one<R: ListResource>(client: &ApiClient, id: i64) -> Result<R, ApiError> {
    let body: Envelope<R> = client.get_json(&format!("{}/{id}", R::BASE)).await?;
    Ok(body.data)
}

/// Create an entity from a form payload.
///
/// # Errors
///
/// Validation details come through verbatim.
pub async fn create<R, I>(client: &ApiClient, input: &I) -> Result<(), ApiError>
where
    R: ListResource,
    I: Serialize,
{
    client
        .post_json::<_, serde_json::Value>(R::BASE, input)
        .await?;
    Ok(())
}

/// Update an entity from a form payload.
///
/// # Errors
///
/// Validation details come through verbatim.
pub async fn update<R, I>(client: &ApiClient, id: i64, input: &I) -> Result<(), ApiError>
where
    R: ListResource,
    I: Serialize,
{
    client
        .put_json::<_, serde_json::Value>(&format!("{}/{id}", R::BASE), input)
        .await?;
    Ok(())
}

/// Delete an entity.
///
/// # Errors
///
/// See the `ApiError` taxonomy.
pub async fn delete<R: ListResource>(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("{}/{id}", R::BASE)).await
}
