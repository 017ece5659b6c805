//! Testing utilities for pixr
//!
//! Provides a [`ScriptedCatalog`] that replays queued responses in order and
//! records every request, plus small photo fixtures.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{CatalogError, Photo, PhotoCatalogClient, PhotoDetails, ResultPage, SearchRequest};
use crate::ui::output::{MessageLevel, OutputWriter};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Catalog client that answers from queues filled by the test
///
/// When a queue runs dry the call fails with a network error, so a test that
/// fetches more than it scripted fails loudly.
///
/// # Examples
/// ```ignore
/// let catalog = ScriptedCatalog::new();
/// catalog.push_page(page_of(photo_range(0, 30), 120, 1));
/// catalog.push_search_error(CatalogError::RateLimited);
/// ```
#[derive(Default)]
pub struct ScriptedCatalog {
    pages: Mutex<VecDeque<Result<ResultPage, CatalogError>>>,
    details: Mutex<VecDeque<Result<PhotoDetails, CatalogError>>>,
    requests: Mutex<Vec<SearchRequest>>,
    detail_calls: AtomicUsize,
}

impl ScriptedCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful search response
    pub fn push_page(&self, page: ResultPage) {
        self.pages.lock().unwrap().push_back(Ok(page));
    }

    /// Queue a failed search response
    pub fn push_search_error(&self, error: CatalogError) {
        self.pages.lock().unwrap().push_back(Err(error));
    }

    /// Queue a detail lookup response
    pub fn push_details(&self, details: Result<PhotoDetails, CatalogError>) {
        self.details.lock().unwrap().push_back(details);
    }

    /// Every search request received so far
    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PhotoCatalogClient for ScriptedCatalog {
    async fn search(&self, request: &SearchRequest) -> Result<ResultPage, CatalogError> {
        self.requests.lock().unwrap().push(request.clone());
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CatalogError::Network("no scripted page".to_string())))
    }

    async fn get_details(&self, photo_id: &str) -> Result<PhotoDetails, CatalogError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.details
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CatalogError::NotFound(photo_id.to_string())))
    }
}

/// Output writer that records every message
#[derive(Default)]
pub struct CaptureWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl CaptureWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Text of every message at `level`
    pub fn lines(&self, level: MessageLevel) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, text)| text)
            .collect()
    }

    fn push(&self, level: MessageLevel, message: &str) {
        self.messages.lock().unwrap().push((level, message.to_string()));
    }
}

impl OutputWriter for CaptureWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}

/// Photos `p{start}` .. `p{end - 1}` with no likes or dimensions
pub fn photo_range(start: usize, end: usize) -> Vec<Photo> {
    (start..end)
        .map(|n| Photo::new(format!("p{n}"), format!("https://img.test/p{n}/thumb"), "Ada"))
        .collect()
}

/// A result page with the given photos
pub fn page_of(photos: Vec<Photo>, total_available: u64, page_number: u32) -> ResultPage {
    ResultPage {
        photos,
        total_available,
        page_number,
        total_pages: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_pages_replay_in_order() {
        let catalog = ScriptedCatalog::new();
        catalog.push_page(page_of(photo_range(0, 2), 4, 1));
        catalog.push_search_error(CatalogError::RateLimited);

        let request = crate::search::SearchQuery::new("cat").request(1);
        let first = catalog.search(&request).await.unwrap();
        assert_eq!(first.photos.len(), 2);
        assert_eq!(
            catalog.search(&request).await.unwrap_err(),
            CatalogError::RateLimited
        );
        assert!(catalog.search(&request).await.is_err());
        assert_eq!(catalog.search_calls(), 3);
    }

    #[tokio::test]
    async fn test_missing_details_are_not_found() {
        let catalog = ScriptedCatalog::new();
        let err = catalog.get_details("p9").await.unwrap_err();

        assert_eq!(err, CatalogError::NotFound("p9".to_string()));
        assert_eq!(catalog.detail_calls(), 1);
    }

    #[test]
    fn test_photo_range_ids() {
        let ids: Vec<String> = photo_range(3, 6).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["p3", "p4", "p5"]);
    }
}
