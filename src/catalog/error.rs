//! Catalog error types
//!
//! Failures a [`PhotoCatalogClient`](super::PhotoCatalogClient) can report.
//! The variants separate what the caller may retry from what it must not:
//!
//! - **`Network`**: transient, the same request may be issued again
//! - **`RateLimited`**: the caller should pause; nothing retries automatically
//! - **`NotFound`**: terminal for a single-photo lookup
//! - **`Unauthorized`**: the access key is missing or rejected
//! - **`InvalidResponse`**: the catalog answered with something undecodable

use thiserror::Error;

/// Errors reported by a photo catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Transport failure or server-side error
    #[error("Network error: {0}")]
    Network(String),

    /// Request quota exhausted
    #[error("Rate limit exceeded, wait before searching again")]
    RateLimited,

    /// Requested photo does not exist
    #[error("Photo not found: {0}")]
    NotFound(String),

    /// Access key missing or rejected
    #[error("Catalog rejected the access key (HTTP {0})")]
    Unauthorized(u16),

    /// Response body could not be decoded
    #[error("Invalid catalog response: {0}")]
    InvalidResponse(String),
}

impl CatalogError {
    /// Whether the same request may simply be issued again
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Whether the caller should back off before the next request
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }

    /// Map a non-success HTTP status to an error
    ///
    /// `subject` names what was requested (a photo id or the search term)
    /// and ends up in `NotFound`.
    #[must_use]
    pub fn from_status(status: u16, body: &str, subject: &str) -> Self {
        match status {
            401 => Self::Unauthorized(status),
            403 if body.to_lowercase().contains("rate limit") => Self::RateLimited,
            403 => Self::Unauthorized(status),
            404 => Self::NotFound(subject.to_string()),
            429 => Self::RateLimited,
            _ => Self::Network(format!("HTTP {status}")),
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
