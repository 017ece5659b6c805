//! Unsplash HTTP client
//!
//! Implements [`PhotoCatalogClient`] against the Unsplash REST API:
//!
//! - `GET /search/photos?query&page&per_page[&orientation][&color]`
//! - `GET /photos/{id}`
//!
//! Requests carry `Authorization: Client-ID <key>` and `Accept-Version: v1`.
//! The wire format is decoded into private structs and mapped onto the
//! catalog types, so nothing outside this file knows about Unsplash JSON.

use super::error::CatalogError;
use super::traits::PhotoCatalogClient;
use super::types::{Photo, PhotoDetails, ResultPage, SearchRequest};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Url;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// Largest page size the API accepts
pub const MAX_PER_PAGE: u32 = 30;

/// HTTP client for the Unsplash catalog
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    http: reqwest::Client,
    base_url: Url,
    per_page: u32,
}

impl UnsplashClient {
    /// Create a client
    ///
    /// `per_page` is clamped to `1..=MAX_PER_PAGE`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Unauthorized` if the key cannot be used as a
    /// header value, or `CatalogError::Network` if the base URL is not an
    /// http(s) URL or the HTTP client fails to build.
    pub fn new(
        access_key: &str,
        base_url: &str,
        per_page: u32,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let base_url = Url::parse(base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| CatalogError::Network(format!("invalid API base URL '{base_url}'")))?;

        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Client-ID {}", access_key.trim()))
            .map_err(|_| CatalogError::Unauthorized(401))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert("accept-version", HeaderValue::from_static("v1"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .user_agent(concat!("pixr/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        })
    }

    /// Page size sent with every search
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Query parameters for a search request
    fn search_params(&self, request: &SearchRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("query", request.term.clone()),
            ("page", request.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ];
        if let Some(orientation) = request.orientation.as_param() {
            params.push(("orientation", orientation.to_string()));
        }
        if let Some(color) = request.color {
            params.push(("color", color.as_param().to_string()));
        }
        params
    }

    /// Base URL extended by `segments`, each percent-encoded as one segment
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // base URLs that cannot carry a path are rejected in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Issue a GET and return the body of a successful response
    async fn get_body(
        &self,
        url: Url,
        params: &[(&'static str, String)],
        subject: &str,
    ) -> Result<String, CatalogError> {
        debug!(%url, ?params, "catalog request");

        let response = self.http.get(url).query(params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(CatalogError::from_status(status.as_u16(), &body, subject))
        }
    }
}

#[async_trait]
impl PhotoCatalogClient for UnsplashClient {
    async fn search(&self, request: &SearchRequest) -> Result<ResultPage, CatalogError> {
        let params = self.search_params(request);
        let url = self.endpoint(&["search", "photos"]);
        let body = self.get_body(url, &params, &request.term).await?;
        parse_search_response(&body, request.page)
    }

    async fn get_details(&self, photo_id: &str) -> Result<PhotoDetails, CatalogError> {
        if photo_id.trim().is_empty() {
            return Err(CatalogError::NotFound(photo_id.to_string()));
        }
        let url = self.endpoint(&["photos", photo_id]);
        let body = self.get_body(url, &[], photo_id).await?;
        parse_photo_details(&body)
    }
}

/// Decode a `/search/photos` response body
///
/// # Errors
///
/// Returns `CatalogError::InvalidResponse` if the body is not the expected JSON.
pub fn parse_search_response(body: &str, page: u32) -> Result<ResultPage, CatalogError> {
    let wire: WireSearchResponse = serde_json::from_str(body)?;
    Ok(ResultPage {
        photos: wire.results.into_iter().map(Photo::from).collect(),
        total_available: wire.total,
        page_number: page,
        total_pages: wire.total_pages,
    })
}

/// Decode a `/photos/{id}` response body
///
/// # Errors
///
/// Returns `CatalogError::InvalidResponse` if the body is not the expected JSON.
pub fn parse_photo_details(body: &str) -> Result<PhotoDetails, CatalogError> {
    let wire: WirePhoto = serde_json::from_str(body)?;
    Ok(PhotoDetails::from(wire))
}

#[derive(Debug, Deserialize)]
struct WireSearchResponse {
    total: u64,
    #[serde(default)]
    total_pages: Option<u32>,
    #[serde(default)]
    results: Vec<WirePhoto>,
}

#[derive(Debug, Deserialize)]
struct WirePhoto {
    id: String,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    alt_description: Option<String>,
    #[serde(default)]
    likes: Option<u64>,
    user: WireUser,
    urls: WireUrls,
    #[serde(default)]
    downloads: Option<u64>,
    #[serde(default)]
    views: Option<u64>,
    #[serde(default)]
    location: Option<WireLocation>,
    #[serde(default)]
    exif: Option<WireExif>,
    #[serde(default)]
    links: Option<WireLinks>,
}

#[derive(Debug, Deserialize)]
struct WireUser {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WireUrls {
    small: String,
    #[serde(default)]
    full: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireLocation {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireExif {
    #[serde(default)]
    make: Option<String>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireLinks {
    #[serde(default)]
    html: Option<String>,
}

impl WireExif {
    fn camera(&self) -> Option<String> {
        match (self.make.as_deref(), self.model.as_deref()) {
            (Some(make), Some(model)) if model.starts_with(make) => Some(model.to_string()),
            (Some(make), Some(model)) => Some(format!("{make} {model}")),
            (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
            (None, None) => None,
        }
    }
}

impl From<WirePhoto> for Photo {
    fn from(wire: WirePhoto) -> Self {
        Self {
            id: wire.id,
            thumbnail_url: wire.urls.small,
            full_url: wire.urls.full,
            author_name: wire.user.name,
            description: wire.description.or(wire.alt_description),
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            likes: wire.likes,
            color: wire.color,
            width: wire.width,
            height: wire.height,
        }
    }
}

impl From<WirePhoto> for PhotoDetails {
    fn from(mut wire: WirePhoto) -> Self {
        let downloads = wire.downloads;
        let views = wire.views;
        let location = wire.location.take().and_then(|l| l.name);
        let camera = wire.exif.take().and_then(|e| e.camera());
        let page_url = wire.links.take().and_then(|l| l.html);

        Self {
            photo: Photo::from(wire),
            downloads,
            views,
            location,
            camera,
            page_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Orientation, PhotoColor};

    const SEARCH_BODY: &str = r##"{
        "total": 120,
        "total_pages": 4,
        "results": [
            {
                "id": "eOLpJytrbsQ",
                "created_at": "2014-11-18T14:35:36-05:00",
                "updated_at": "2024-01-02T10:00:00Z",
                "width": 4000,
                "height": 3000,
                "color": "#A7A2A1",
                "description": null,
                "alt_description": "cat on a windowsill",
                "likes": 286,
                "user": { "name": "Jeff Sheldon" },
                "urls": {
                    "small": "https://images.unsplash.com/photo-1?w=400",
                    "full": "https://images.unsplash.com/photo-1"
                }
            },
            {
                "id": "second",
                "likes": 900,
                "user": { "name": "Ada" },
                "urls": { "small": "https://images.unsplash.com/photo-2?w=400" }
            }
        ]
    }"##;

    fn client() -> UnsplashClient {
        UnsplashClient::new("key", "https://api.example.com/", 50, Duration::from_secs(5))
            .unwrap()
    }

    #[test]
    fn test_parse_search_response() {
        let page = parse_search_response(SEARCH_BODY, 1).unwrap();

        assert_eq!(page.total_available, 120);
        assert_eq!(page.total_pages, Some(4));
        assert_eq!(page.page_number, 1);
        assert_eq!(page.photos.len(), 2);

        let first = &page.photos[0];
        assert_eq!(first.id, "eOLpJytrbsQ");
        assert_eq!(first.author_name, "Jeff Sheldon");
        assert_eq!(first.description.as_deref(), Some("cat on a windowsill"));
        assert_eq!(first.full_url.as_deref(), Some("https://images.unsplash.com/photo-1"));
        assert_eq!(first.likes, Some(286));
        assert_eq!(first.dimensions_label().as_deref(), Some("4000x3000"));
        assert!(first.created_at.is_some());

        let second = &page.photos[1];
        assert_eq!(second.full_url, None);
        assert_eq!(second.width, None);
    }

    #[test]
    fn test_parse_search_response_rejects_garbage() {
        let result = parse_search_response("<html>oops</html>", 1);
        assert!(matches!(result, Err(CatalogError::InvalidResponse(_))));
    }

    #[test]
    fn test_parse_photo_details() {
        let body = r#"{
            "id": "p1",
            "likes": 10,
            "downloads": 1234,
            "views": 99999,
            "user": { "name": "Ada" },
            "urls": { "small": "s", "full": "f" },
            "location": { "name": "Oslo, Norway" },
            "exif": { "make": "Canon", "model": "Canon EOS 5D" },
            "links": { "html": "https://unsplash.com/photos/p1" }
        }"#;

        let details = parse_photo_details(body).unwrap();
        assert_eq!(details.photo.id, "p1");
        assert_eq!(details.downloads, Some(1234));
        assert_eq!(details.views, Some(99999));
        assert_eq!(details.location.as_deref(), Some("Oslo, Norway"));
        assert_eq!(details.camera.as_deref(), Some("Canon EOS 5D"));
        assert_eq!(details.page_url.as_deref(), Some("https://unsplash.com/photos/p1"));
    }

    #[test]
    fn test_camera_joins_make_and_model() {
        let exif = WireExif {
            make: Some("FUJIFILM".into()),
            model: Some("X-T3".into()),
        };
        assert_eq!(exif.camera().as_deref(), Some("FUJIFILM X-T3"));
    }

    #[test]
    fn test_search_params_include_server_filters() {
        let request = SearchRequest {
            term: "cat".into(),
            page: 3,
            orientation: Orientation::Portrait,
            color: Some(PhotoColor::BlackAndWhite),
        };

        let params = client().search_params(&request);
        assert!(params.contains(&("query", "cat".to_string())));
        assert!(params.contains(&("page", "3".to_string())));
        assert!(params.contains(&("per_page", "30".to_string())));
        assert!(params.contains(&("orientation", "portrait".to_string())));
        assert!(params.contains(&("color", "black_and_white".to_string())));
    }

    #[test]
    fn test_search_params_omit_unset_filters() {
        let request = SearchRequest {
            term: "dog".into(),
            page: 1,
            orientation: Orientation::Any,
            color: None,
        };

        let params = client().search_params(&request);
        assert!(!params.iter().any(|(k, _)| *k == "orientation"));
        assert!(!params.iter().any(|(k, _)| *k == "color"));
    }

    #[test]
    fn test_endpoint_joins_segments() {
        assert_eq!(
            client().endpoint(&["search", "photos"]).as_str(),
            "https://api.example.com/search/photos"
        );

        let nested =
            UnsplashClient::new("key", "https://proxy.test/unsplash", 30, Duration::from_secs(5))
                .unwrap();
        assert_eq!(
            nested.endpoint(&["photos", "abc"]).as_str(),
            "https://proxy.test/unsplash/photos/abc"
        );
    }

    #[test]
    fn test_photo_id_stays_one_segment() {
        let url = client().endpoint(&["photos", "../search/photos?query=x#y"]);

        assert_eq!(
            url.as_str(),
            "https://api.example.com/photos/..%2Fsearch%2Fphotos%3Fquery=x%23y"
        );
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
        assert_eq!(url.path_segments().map(Iterator::count), Some(2));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        for base in ["not a url", "mailto:someone@example.com"] {
            let err = UnsplashClient::new("key", base, 30, Duration::from_secs(5)).unwrap_err();
            assert!(matches!(err, CatalogError::Network(msg) if msg.contains("base URL")));
        }
    }

    #[tokio::test]
    async fn test_blank_photo_id_is_not_found_without_request() {
        let err = client().get_details("  ").await.unwrap_err();
        assert_eq!(err, CatalogError::NotFound("  ".to_string()));
    }
}
