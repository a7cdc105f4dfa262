//! Config module - Manages Media Tracker configuration (media-tracker.toml).
//!
//! Configuration file contains:
//! - Data directory holding the media database
//! - Export directory for JSON backups

use crate::storage::media_db;
use crate::transfer;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main Media Tracker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Config version (for future migrations)
    #[serde(default = "default_version")]
    pub version: u32,

    /// Directory holding the media database
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory exports are written to (default: current directory)
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            data_dir: default_data_dir(),
            export_dir: None,
        }
    }
}

/// Get default data directory.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("media-tracker"))
        .unwrap_or_else(|| PathBuf::from("./media-tracker"))
}

/// Get default config directory (~/.config/media-tracker/).
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("media-tracker"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get default config file path.
pub fn default_config_path() -> PathBuf {
    default_config_dir().join("media-tracker.toml")
}

impl Config {
    /// Create config with specific data directory.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            ..Self::default()
        }
    }

    /// Load config from file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Cannot parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when the file is missing.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).with_context(|| "Cannot serialize config to TOML")?;

        std::fs::write(path, content)
            .with_context(|| format!("Cannot write config file: {}", path.display()))?;

        Ok(())
    }

    /// Get the database file path.
    pub fn db_path(&self) -> PathBuf {
        media_db::db_path(&self.data_dir)
    }

    /// Where `export` writes when no output path is given.
    pub fn export_path(&self) -> PathBuf {
        let dir = self
            .export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        transfer::export_path(&dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, 1);
        assert!(config.export_dir.is_none());
        assert_eq!(
            config.export_path(),
            PathBuf::from(".").join("media-tracker-data.json")
        );
    }

    #[test]
    fn test_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("test.toml");

        let mut config = Config::with_data_dir(temp_dir.path().join("data"));
        config.export_dir = Some(temp_dir.path().join("backups"));
        config.save(&config_path)?;

        let loaded = Config::load(&config_path)?;
        assert_eq!(loaded.data_dir, temp_dir.path().join("data"));
        assert_eq!(
            loaded.export_path(),
            temp_dir.path().join("backups").join("media-tracker-data.json")
        );
        assert_eq!(
            loaded.db_path(),
            temp_dir.path().join("data").join("mediaTrackerDB.sqlite")
        );

        Ok(())
    }

    #[test]
    fn test_missing_file_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_or_default(&temp_dir.path().join("absent.toml"))?;
        assert_eq!(config.version, 1);
        assert_eq!(config.data_dir, default_data_dir());
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("partial.toml");
        std::fs::write(&path, "data_dir = \"/tmp/media\"\n")?;

        let config = Config::load(&path)?;
        assert_eq!(config.version, 1);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/media"));
        assert!(config.export_dir.is_none());
        Ok(())
    }
}
