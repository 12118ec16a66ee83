//! Typed resource services.
//!
//! ARCHITECTURE
//! ============
//! Every collection exposes the same five calls over the same envelopes, so
//! the request plumbing lives once in [`ResourceService`] and each entity is
//! a zero-sized marker implementing [`Resource`]. Entity-specific extras
//! (tag counts, team reordering) are inherent impls on the concrete service.

use std::marker::PhantomData;

use models::endpoints::by_id;
use models::{ApiResponse, ListQuery, Paginated};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::api::ApiClient;
use crate::error::ApiError;

pub mod blogs;
pub mod case_studies;
pub mod teams;
pub mod users;

pub use blogs::{BlogService, Blogs};
pub use case_studies::{CaseStudies, CaseStudyService};
pub use teams::{TeamService, Teams};
pub use users::{UserService, Users};

/// One REST collection.
pub trait Resource: Send + Sync + 'static {
    type Item: DeserializeOwned + Clone + Send + Sync + 'static;
    type Create: Serialize + Send + Sync;
    type Update: Serialize + Send + Sync;
    type Query: ListQuery;

    /// Collection path, e.g. `/blogs`.
    const BASE: &'static str;
    /// Singular noun for messages, e.g. `blog`.
    const NOUN: &'static str;
    /// Plural noun for messages, e.g. `blogs`.
    const PLURAL: &'static str;

    /// Record id, used when refreshing or reporting.
    fn id(item: &Self::Item) -> &str;
}

pub struct ResourceService<R> {
    api: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self { api: self.api.clone(), _resource: PhantomData }
    }
}

impl<R> std::fmt::Debug for ResourceService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceService").field("api", &self.api).finish()
    }
}

impl<R: Resource> ResourceService<R> {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api, _resource: PhantomData }
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// One page of the collection. Unset filters are left out of the query.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list(&self, query: &R::Query) -> Result<Paginated<R::Item>, ApiError> {
        self.api.get_query(R::BASE, query).await
    }

    /// # Errors
    ///
    /// [`ApiError::NotFound`] when the id does not exist.
    pub async fn get(&self, id: &str) -> Result<R::Item, ApiError> {
        let body: ApiResponse<R::Item> = self.api.get(&by_id(R::BASE, id)).await?;
        Ok(body.data)
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create(&self, payload: &R::Create) -> Result<R::Item, ApiError> {
        let body: ApiResponse<R::Item> = self.api.post(R::BASE, payload).await?;
        info!(id = R::id(&body.data), "{}: created", R::NOUN);
        Ok(body.data)
    }

    /// Partial update; fields the payload omits stay unchanged.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn update(&self, id: &str, payload: &R::Update) -> Result<R::Item, ApiError> {
        let body: ApiResponse<R::Item> = self.api.put(&by_id(R::BASE, id), payload).await?;
        info!(id, "{}: updated", R::NOUN);
        Ok(body.data)
    }

    /// Permanently delete. Callers confirm with the user before calling.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self.api.delete(&by_id(R::BASE, id)).await?;
        info!(id, "{}: deleted", R::NOUN);
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
