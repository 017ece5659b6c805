//! Catalog client abstraction
//!
//! The search and overlay layers only ever talk to a catalog through
//! [`PhotoCatalogClient`]. The HTTP implementation lives in
//! [`super::unsplash`]; tests use a scripted in-memory client.

use super::error::CatalogError;
use super::types::{PhotoDetails, ResultPage, SearchRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Remote photo catalog
///
/// Both calls are suspension points: other work proceeds while they are
/// outstanding. Implementations must not retry on their own.
#[async_trait]
pub trait PhotoCatalogClient: Send + Sync {
    /// Run one page of a keyword search
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Network` for transient failures and
    /// `CatalogError::RateLimited` when the caller must back off.
    async fn search(&self, request: &SearchRequest) -> Result<ResultPage, CatalogError>;

    /// Fetch the extended record for one photo
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the id is unknown.
    async fn get_details(&self, photo_id: &str) -> Result<PhotoDetails, CatalogError>;
}

#[async_trait]
impl<T: PhotoCatalogClient + ?Sized> PhotoCatalogClient for Arc<T> {
    async fn search(&self, request: &SearchRequest) -> Result<ResultPage, CatalogError> {
        (**self).search(request).await
    }

    async fn get_details(&self, photo_id: &str) -> Result<PhotoDetails, CatalogError> {
        (**self).get_details(photo_id).await
    }
}
