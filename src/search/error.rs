//! Search-specific error types
//!
//! Everything `fetch_next_page` can hand back instead of a merged page.
//!
//! # Error Types
//!
//! - **`Busy`**: another page fetch is outstanding; not a failure, safe to ignore
//! - **`NoActiveSearch`**: nothing has been submitted yet
//! - **`UnknownTicket`**: a completion for a ticket that does not hold the
//!   gate; ignored
//! - **`Catalog`**: the remote call failed (wraps `CatalogError`); the session
//!   is left untouched so the same page can be requested again

use crate::catalog::CatalogError;
use thiserror::Error;

/// Page fetch errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// A fetch is already in flight; the request was dropped
    #[error("A page fetch is already in progress")]
    Busy,

    /// No search has been submitted yet
    #[error("No active search, submit a search term first")]
    NoActiveSearch,

    /// The ticket was already completed or never admitted by this session
    #[error("Fetch ticket {0} is not outstanding")]
    UnknownTicket(u64),

    /// The catalog call failed
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl FetchError {
    /// Whether this is the expected result of an overlapping request
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }

    /// Whether the same page may be requested again right away
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Catalog(err) => err.is_retryable(),
            Self::Busy | Self::NoActiveSearch | Self::UnknownTicket(_) => false,
        }
    }

    /// Whether the caller should pause before paging further
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Catalog(CatalogError::RateLimited))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
