//! Pixr - keyword search over a remote photo catalog
//!
//! This library provides the search session, pagination and filtering logic
//! behind the `pixr` CLI and terminal browser, together with the catalog
//! client, the selection overlay state machine and download support.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod download;
pub mod filters;
pub mod logging;
pub mod overlay;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PixrError {
    /// Catalog request error outside of a search session
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Page fetch error
    #[error("Search error: {0}")]
    FetchError(#[from] search::FetchError),
    /// Download error
    #[error("Download error: {0}")]
    DownloadError(#[from] download::DownloadError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// JSON output error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Logging could not be initialised
    #[error("Logging error: {0}")]
    LoggingError(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
