//! Interactive setup wizard for first-time configuration
//!
//! Runs when pixr starts without a config file.

use super::{ACCESS_KEY_ENV, PixrConfig};
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

/// Interactive first-time setup
///
/// 1. Prompts for the Unsplash access key (pre-filled from
///    `UNSPLASH_ACCESS_KEY` when set)
/// 2. Prompts for the download directory
/// 3. Saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read or the configuration
/// cannot be saved.
pub fn first_time_setup() -> Result<PixrConfig, ConfigError> {
    println!("Welcome to pixr! Let's connect to the photo catalog.\n");
    println!("Create a free access key at https://unsplash.com/developers\n");

    let theme = ColorfulTheme::default();
    let mut config = PixrConfig::default();

    let env_key = std::env::var(ACCESS_KEY_ENV).unwrap_or_default();
    let access_key: String = Input::with_theme(&theme)
        .with_prompt("Access key")
        .default(env_key)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let default_dir = config.download_dir_or_default();
    let download_dir: String = Input::with_theme(&theme)
        .with_prompt("Download directory")
        .default(default_dir.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    config.access_key = Some(access_key.trim().to_string()).filter(|k| !k.is_empty());
    config.download_dir = Some(PathBuf::from(download_dir));

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
