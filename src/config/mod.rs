//! Configuration module for pixr
//!
//! Settings live in `<config_dir>/pixr/config.toml` and can be overridden per
//! invocation with `PIXR_*` environment variables (e.g. `PIXR_PER_PAGE=10`).
//! The Unsplash access key may also come from `UNSPLASH_ACCESS_KEY`.

mod setup;

pub use setup::first_time_setup;

use crate::catalog::unsplash::{DEFAULT_BASE_URL, MAX_PER_PAGE};
use crate::overlay::{DEFAULT_ENTER_MS, DEFAULT_EXIT_MS, TransitionDurations};
use crate::search::{DEFAULT_NEAR_END_THRESHOLD, DEFAULT_RESULT_CAP, PaginationTrigger};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable consulted when no access key is configured
pub const ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";

/// Keys accepted by `pixr config get/set`
pub const CONFIG_KEYS: &[&str] = &[
    "access_key",
    "api_base_url",
    "per_page",
    "result_cap",
    "near_end_threshold",
    "enter_transition_ms",
    "exit_transition_ms",
    "request_timeout_secs",
    "detail_cache_capacity",
    "download_dir",
    "quiet",
];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PixrConfig {
    /// Unsplash API access key
    pub access_key: Option<String>,

    pub api_base_url: String,

    /// Photos requested per page (1..=30)
    pub per_page: u32,

    /// A session stops paging once it holds this many photos
    pub result_cap: usize,

    /// Rows from the end of the list that trigger the next page
    pub near_end_threshold: usize,

    pub enter_transition_ms: u64,
    pub exit_transition_ms: u64,
    pub request_timeout_secs: u64,

    /// Maximum number of photo detail records kept in memory
    pub detail_cache_capacity: u64,

    /// Where downloads are saved; defaults to the user's picture directory
    pub download_dir: Option<PathBuf>,

    /// Suppress informational output by default
    pub quiet: bool,
}

impl Default for PixrConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            per_page: MAX_PER_PAGE,
            result_cap: DEFAULT_RESULT_CAP,
            near_end_threshold: DEFAULT_NEAR_END_THRESHOLD,
            enter_transition_ms: DEFAULT_ENTER_MS,
            exit_transition_ms: DEFAULT_EXIT_MS,
            request_timeout_secs: 15,
            detail_cache_capacity: 256,
            download_dir: None,
            quiet: false,
        }
    }
}

impl PixrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("pixr").join("config.toml"))
    }

    /// Load configuration from the default location with environment overrides
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or an override cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        Self::build(&path, Some(Environment::with_prefix("PIXR").try_parsing(true)))
    }

    /// Load configuration from `path` only
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(path, None)
    }

    fn build(path: &Path, env: Option<Environment>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false));
        if let Some(env) = env {
            builder = builder.add_source(env);
        }

        builder.build()?.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// See [`Self::save`].
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }

    /// Access key from the config, falling back to `UNSPLASH_ACCESS_KEY`
    #[must_use]
    pub fn resolved_access_key(&self) -> Option<String> {
        self.access_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(ACCESS_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
    }

    /// Directory downloads are written to
    #[must_use]
    pub fn download_dir_or_default(&self) -> PathBuf {
        self.download_dir.clone().unwrap_or_else(|| {
            dirs::picture_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."))
                .join("pixr")
        })
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub const fn transition_durations(&self) -> TransitionDurations {
        TransitionDurations::from_millis(self.enter_transition_ms, self.exit_transition_ms)
    }

    #[must_use]
    pub const fn pagination_trigger(&self) -> PaginationTrigger {
        PaginationTrigger::new(self.near_end_threshold, self.result_cap)
    }

    /// Read a single setting as text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for unknown keys.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "access_key" => self.access_key.clone().unwrap_or_default(),
            "api_base_url" => self.api_base_url.clone(),
            "per_page" => self.per_page.to_string(),
            "result_cap" => self.result_cap.to_string(),
            "near_end_threshold" => self.near_end_threshold.to_string(),
            "enter_transition_ms" => self.enter_transition_ms.to_string(),
            "exit_transition_ms" => self.exit_transition_ms.to_string(),
            "request_timeout_secs" => self.request_timeout_secs.to_string(),
            "detail_cache_capacity" => self.detail_cache_capacity.to_string(),
            "download_dir" => self.download_dir_or_default().display().to_string(),
            "quiet" => self.quiet.to_string(),
            _ => return Err(ConfigError::NotFound(key.to_string())),
        };
        Ok(value)
    }

    /// Update a single setting from text
    ///
    /// Does not save; call [`Self::save`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for unknown keys and
    /// `ConfigError::Message` for values that do not parse or are out of range.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "access_key" => {
                self.access_key = Some(value.trim().to_string()).filter(|v| !v.is_empty());
            }
            "api_base_url" => self.api_base_url = value.trim().to_string(),
            "per_page" => {
                let per_page: u32 = parse_value(key, value)?;
                if !(1..=MAX_PER_PAGE).contains(&per_page) {
                    return Err(ConfigError::Message(format!(
                        "per_page must be between 1 and {MAX_PER_PAGE}"
                    )));
                }
                self.per_page = per_page;
            }
            "result_cap" => self.result_cap = parse_value(key, value)?,
            "near_end_threshold" => self.near_end_threshold = parse_value(key, value)?,
            "enter_transition_ms" => self.enter_transition_ms = parse_value(key, value)?,
            "exit_transition_ms" => self.exit_transition_ms = parse_value(key, value)?,
            "request_timeout_secs" => self.request_timeout_secs = parse_value(key, value)?,
            "detail_cache_capacity" => self.detail_cache_capacity = parse_value(key, value)?,
            "download_dir" => {
                self.download_dir = Some(PathBuf::from(value.trim())).filter(|p| !p.as_os_str().is_empty());
            }
            "quiet" => self.quiet = parse_value(key, value)?,
            _ => return Err(ConfigError::NotFound(key.to_string())),
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Message(format!("Invalid value '{value}' for '{key}'")))
}
