//! Detail-lookup cache
//!
//! Wraps any [`PhotoCatalogClient`] and memoizes `get_details` results.
//! Searches always go to the inner client; result pages change as the
//! catalog grows, detail records rarely do.

use super::error::CatalogError;
use super::traits::PhotoCatalogClient;
use super::types::{PhotoDetails, ResultPage, SearchRequest};
use async_trait::async_trait;
use moka::sync::Cache;
use std::time::Duration;
use tracing::trace;

/// Catalog client with a bounded detail cache
pub struct CachedCatalog<C> {
    inner: C,
    details: Cache<String, PhotoDetails>,
}

impl<C: PhotoCatalogClient> CachedCatalog<C> {
    /// Wrap `inner` with a cache of at most `max_capacity` detail records
    #[must_use]
    pub fn new(inner: C, max_capacity: u64) -> Self {
        Self::with_cache_config(inner, Duration::from_secs(600), max_capacity)
    }

    /// Wrap `inner` with a custom time-to-live and capacity
    #[must_use]
    pub fn with_cache_config(inner: C, ttl: Duration, max_capacity: u64) -> Self {
        let details = Cache::builder()
            .time_to_live(ttl)
            .max_capacity(max_capacity)
            .build();

        Self { inner, details }
    }

    /// Drop every cached record
    pub fn clear_cache(&self) {
        self.details.invalidate_all();
    }

    /// Access the wrapped client
    #[must_use]
    pub const fn inner(&self) -> &C {
        &self.inner
    }
}

#[async_trait]
impl<C: PhotoCatalogClient> PhotoCatalogClient for CachedCatalog<C> {
    async fn search(&self, request: &SearchRequest) -> Result<ResultPage, CatalogError> {
        self.inner.search(request).await
    }

    async fn get_details(&self, photo_id: &str) -> Result<PhotoDetails, CatalogError> {
        if let Some(details) = self.details.get(photo_id) {
            trace!(photo_id, "detail cache hit");
            return Ok(details);
        }

        let details = self.inner.get_details(photo_id).await?;
        self.details.insert(photo_id.to_string(), details.clone());
        Ok(details)
    }
}
