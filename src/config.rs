//! Application configuration.
//!
//! `Default` gives a working setup rooted in the current directory; a JSON
//! file can override any subset of fields.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::preferences::MAX_RECENT_EDITS;
use crate::repository::DEFAULT_INTENSITY_PERCENT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where saved edits are written.
    pub output_dir: PathBuf,
    /// Scratch space; shared exports go to `<cache_dir>/shared_images`.
    pub cache_dir: PathBuf,
    /// JSON preferences file holding recent edits and the favorite filter.
    pub preferences_path: PathBuf,
    /// JPEG quality (1-100) for saved and shared images.
    pub jpeg_quality: u8,
    /// Intensity, in percent, a fresh editor session starts with.
    pub default_intensity: f32,
    /// Length of the recent-edits list.
    pub max_recent_edits: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("edits"),
            cache_dir: PathBuf::from("cache"),
            preferences_path: PathBuf::from("photo_filter_prefs.json"),
            jpeg_quality: 95,
            default_intensity: DEFAULT_INTENSITY_PERCENT,
            max_recent_edits: MAX_RECENT_EDITS,
        }
    }
}

impl AppConfig {
    /// Read a JSON config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let mut config: AppConfig = serde_json::from_str(&content)?;
        config.jpeg_quality = config.jpeg_quality.clamp(1, 100);
        config.default_intensity = config.default_intensity.clamp(0.0, 100.0);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.jpeg_quality, 95);
        assert_eq!(config.default_intensity, 100.0);
        assert_eq!(config.max_recent_edits, 10);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = AppConfig::load(&dir.path().join("absent.json")).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "jpeg_quality": 0, "output_dir": "/tmp/out" }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();

        assert_eq!(config.jpeg_quality, 1);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.max_recent_edits, 10);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Json(_))));
    }
}
