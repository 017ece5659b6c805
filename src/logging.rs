//! Diagnostic logging
//!
//! CLI commands log to stderr. The terminal browser owns the screen, so it
//! logs to `<data_dir>/pixr/pixr.log` instead. The filter comes from
//! `PIXR_LOG` when set, otherwise from the `-v` count.

use crate::PixrError;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "PIXR_LOG";

/// Where log records go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Default directive for a `-v` count
#[must_use]
pub const fn directive_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "pixr=warn",
        1 => "pixr=info",
        2 => "pixr=debug",
        _ => "pixr=trace",
    }
}

/// Filter from `PIXR_LOG`, falling back to the verbosity default
#[must_use]
pub fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(directive_for(verbosity)))
}

/// Log file used by the terminal browser
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("pixr").join("pixr.log"))
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns `PixrError::IoError` if the log file cannot be opened and
/// `PixrError::LoggingError` if a subscriber is already installed.
pub fn init(verbosity: u8, target: &LogTarget) -> Result<(), PixrError> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(verbosity));

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).with_target(false).try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            builder.with_writer(Mutex::new(file)).with_ansi(false).try_init()
        }
    };

    result.map_err(|e| PixrError::LoggingError(e.to_string()))
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directive_for_verbosity() {
        assert_eq!(directive_for(0), "pixr=warn");
        assert_eq!(directive_for(1), "pixr=info");
        assert_eq!(directive_for(2), "pixr=debug");
        assert_eq!(directive_for(9), "pixr=trace");
    }

    #[test]
    fn test_open_log_file_creates_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("pixr.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_default_log_path_file_name() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("pixr/pixr.log"));
        }
    }
}
