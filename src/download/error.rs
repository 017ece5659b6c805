//! Download error types

use thiserror::Error;

/// Errors from saving a photo to disk
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The photo record has no usable image URL
    #[error("Photo '{0}' has no image URL")]
    MissingUrl(String),

    /// The photo id leaves nothing usable as a file name
    #[error("Photo id '{0}' cannot be used as a file name")]
    InvalidId(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The image server answered with a non-success status
    #[error("Image server returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
