//! Persisted preferences.
//!
//! A small TOML file under the platform config directory remembers the UI
//! language and an optional content-directory override. Loading is tolerant:
//! a missing or corrupt file degrades to defaults with a warning, never an
//! error, because preferences must not keep the app from starting.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};
use crate::locale::Language;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: Language,
    pub content_dir: Option<PathBuf>,
}

impl Settings {
    /// Platform preferences path, e.g. `~/.config/termfolio/config.toml`.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("termfolio").join("config.toml"))
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("ignoring invalid preferences file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("could not read preferences file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| FolioError::config("no config directory on this platform"))?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| FolioError::content_error("creating preferences directory", e))?;
        }
        let raw = toml::to_string_pretty(self)
            .map_err(|e| FolioError::config(format!("serializing preferences: {e}")))?;
        std::fs::write(path, raw)
            .map_err(|e| FolioError::content_error("writing preferences file", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let settings = Settings {
            language: Language::Es,
            content_dir: Some(PathBuf::from("/tmp/posts")),
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = Settings::load_from(&dir.path().join("absent.toml"));
        assert_eq!(loaded, Settings::default());
        assert_eq!(loaded.language, Language::En);
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "language = \"klingon\"\n{{not toml").unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "language = \"es\"\n").unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.language, Language::Es);
        assert_eq!(loaded.content_dir, None);
    }
}
