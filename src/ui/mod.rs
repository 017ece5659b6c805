//! UI layer
//!
//! Commands report through the [`OutputWriter`] abstraction, so the same
//! command code can print to the terminal or feed the browser's status bar.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   SearchController / SelectionOverlay   │
//! └────────────────┬────────────────────────┘
//!                  │ driven by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ CLI commands  │  │ tui::App          │
//! │ StdoutWriter  │  │ StatusBarWriter   │
//! └───────────────┘  └───────────────────┘
//! ```

pub mod error;
pub mod output;
pub mod tui;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StatusBarWriter, StdoutWriter};
