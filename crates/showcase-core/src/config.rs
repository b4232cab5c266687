use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ShowcaseError;
use crate::sizing::{GridLayout, SizeKey, SpacingMode};
use crate::storage::FileStore;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub display: DisplayConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub default_size: SizeKey,
    #[serde(default)]
    pub spacing: SpacingMode,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load the user config, or the built-in defaults when none is saved.
    pub fn load() -> Result<Self, ShowcaseError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ShowcaseError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    pub fn from_toml(content: &str) -> Result<Self, ShowcaseError> {
        toml::from_str(content).map_err(|e| ShowcaseError::Config(e.to_string()))
    }

    pub fn save(&self) -> Result<(), ShowcaseError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ShowcaseError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ShowcaseError::Config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Where the key/value store lives: the configured path or the data dir.
    pub fn storage_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(FileStore::default_path)
    }

    /// Grid layout for the configured default card size.
    pub fn default_layout(&self) -> GridLayout {
        GridLayout::for_size(self.display.default_size)
    }

    /// Gap between cards for the configured size and spacing mode.
    pub fn default_gap(&self) -> f64 {
        self.default_layout().spacing.get(self.display.spacing)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_toml(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

/// Platform directories shared by the config file and the key/value store.
pub(crate) fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "showcase")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::default();
        assert_eq!(config.display.default_size, SizeKey::Baseline);
        assert_eq!(config.display.spacing, SpacingMode::Balanced);
        assert!(config.storage.path.is_none());
        assert!((config.default_gap() - 205.794).abs() < 1e-9);
    }

    #[test]
    fn test_roundtrip() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized = AppConfig::from_toml(&serialized).unwrap();
        assert_eq!(deserialized.display.default_size, config.display.default_size);
    }

    #[test]
    fn test_invalid_size_rejected() {
        let result = AppConfig::from_toml("[display]\ndefault_size = 12\n");
        assert!(matches!(result, Err(ShowcaseError::Config(_))));
    }

    #[test]
    fn test_storage_override() {
        let config = AppConfig::from_toml(
            "[display]\ndefault_size = 3\nspacing = \"compact\"\n\n[storage]\npath = \"/tmp/s.json\"\n",
        )
        .unwrap();
        assert_eq!(config.storage_path(), PathBuf::from("/tmp/s.json"));
        assert_eq!(config.default_layout().columns, 6);
        assert_eq!(config.default_gap(), 83.0);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.display.default_size, SizeKey::Baseline);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.display.default_size = SizeKey::Showcase;
        config.display.spacing = SpacingMode::Spacious;
        config.save_to(&path).unwrap();

        let reloaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(reloaded.display.default_size, SizeKey::Showcase);
        assert_eq!(reloaded.default_gap(), 777.0 * 0.75);
    }
}
