//! Config command - read and change settings

use crate::{PixrError, cli::ConfigCommands, config::PixrConfig, ui::OutputWriter};
use std::path::Path;

type Result<T> = std::result::Result<T, PixrError>;

/// Execute the config command against the default config file
///
/// # Errors
/// Returns an error if the setting is malformed or the file cannot be saved.
pub fn execute(
    config: &mut PixrConfig,
    command: &ConfigCommands,
    output: &dyn OutputWriter,
) -> Result<()> {
    let path = PixrConfig::config_path()?;
    execute_at(config, command, &path, output)
}

/// Execute the config command against the config file at `path`
///
/// # Errors
/// See [`execute`].
pub fn execute_at(
    config: &mut PixrConfig,
    command: &ConfigCommands,
    path: &Path,
    output: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                PixrError::InvalidInput(format!(
                    "Invalid format: '{setting}'. Expected KEY=VALUE"
                ))
            })?;
            let key = key.trim();
            config.set(key, value)?;
            config.save_to(path)?;
            output.success(&format!("Set {key} = {}", config.get(key)?));
        }
        ConfigCommands::Get { key } => {
            output.write(&config.get(key.trim())?);
        }
        ConfigCommands::Path => {
            output.write(&path.display().to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CaptureWriter;
    use crate::ui::output::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn test_set_saves_and_get_reads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = PixrConfig::default();
        let output = CaptureWriter::new();

        let set = ConfigCommands::Set { setting: "per_page=12".into() };
        execute_at(&mut config, &set, &path, &output).unwrap();

        assert_eq!(output.lines(MessageLevel::Success), vec!["Set per_page = 12"]);
        assert_eq!(PixrConfig::load_from(&path).unwrap().per_page, 12);

        let get = ConfigCommands::Get { key: "per_page".into() };
        execute_at(&mut config, &get, &path, &output).unwrap();
        assert_eq!(output.lines(MessageLevel::Normal), vec!["12"]);
    }

    #[test]
    fn test_set_requires_equals() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = PixrConfig::default();

        let set = ConfigCommands::Set { setting: "per_page".into() };
        let err = execute_at(&mut config, &set, &path, &CaptureWriter::new()).unwrap_err();

        assert!(matches!(err, PixrError::InvalidInput(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_unknown_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = PixrConfig::default();

        let get = ConfigCommands::Get { key: "colour".into() };
        let err = execute_at(&mut config, &get, &path, &CaptureWriter::new()).unwrap_err();

        assert!(matches!(err, PixrError::ConfigError(_)));
    }

    #[test]
    fn test_path_prints_location() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let output = CaptureWriter::new();

        execute_at(&mut PixrConfig::default(), &ConfigCommands::Path, &path, &output).unwrap();

        assert_eq!(output.lines(MessageLevel::Normal), vec![path.display().to_string()]);
    }
}
