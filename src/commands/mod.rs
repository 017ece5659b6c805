//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against the photo catalog.

pub mod browse;
pub mod completions;
pub mod config;
pub mod details;
pub mod download;
pub mod search;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use completions::execute as completions;
pub use config::execute as config;
pub use details::execute as details;
pub use download::execute as download;
pub use search::execute as search;
