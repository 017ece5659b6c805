//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// The terminal could not be put into or restored from TUI mode
    #[error("Terminal error: {0}")]
    TerminalError(String),

    /// UI operation was interrupted or cancelled
    #[error("UI operation was interrupted")]
    InterruptedError,

    /// Clipboard or opener failure
    #[error("Action failed: {0}")]
    ActionFailed(String),

    /// IO error during UI operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
