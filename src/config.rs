/// Application configuration
///
/// Read from `config.toml` in the application data directory:
/// - Linux: ~/.local/share/virtual-wardrobe/config.toml
/// - macOS: ~/Library/Application Support/virtual-wardrobe/config.toml
/// - Windows: %APPDATA%\virtual-wardrobe\config.toml
///
/// Every field is optional; a missing file means all defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{Result, WardrobeError};

/// Item photos taller than this are downscaled on import
pub const DEFAULT_MAX_IMAGE_HEIGHT: u32 = 550;

/// JPEG quality used when a downscaled photo is re-encoded (0.8)
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite file holding the key-value store
    pub database_path: PathBuf,
    pub max_image_height: u32,
    pub jpeg_quality: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: app_data_dir().join("wardrobe.db"),
            max_image_height: DEFAULT_MAX_IMAGE_HEIGHT,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl AppConfig {
    /// Load the config from the default location, falling back to defaults
    /// if the file is unreadable or malformed.
    pub fn load() -> Self {
        let path = app_data_dir().join("config.toml");
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: AppConfig =
            toml::from_str(&raw).map_err(|e| WardrobeError::Config(e.to_string()))?;
        config.validate()?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.max_image_height == 0 {
            return Err(WardrobeError::Config(
                "max_image_height must be greater than 0".to_string(),
            ));
        }
        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err(WardrobeError::Config(format!(
                "jpeg_quality must be in 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }
}

/// Directory for the database and config file
pub fn app_data_dir() -> PathBuf {
    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    path.push("virtual-wardrobe");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.max_image_height, 550);
        assert_eq!(config.jpeg_quality, 80);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "max_image_height = 300").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.max_image_height, 300);
        assert_eq!(config.jpeg_quality, DEFAULT_JPEG_QUALITY);
    }

    #[test]
    fn test_out_of_range_quality_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "jpeg_quality = 150").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, WardrobeError::Config(_)));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_image_height = \"tall\"").unwrap();

        assert!(matches!(
            AppConfig::load_from(&path),
            Err(WardrobeError::Config(_))
        ));
    }
}
