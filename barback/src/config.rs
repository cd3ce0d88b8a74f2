//! Configuration for the export engine.
//!
//! Loaded from a TOML file; every field has a default so an empty file (or
//! no file at all) yields a working configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Engine configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Directory where generated archives land when the caller does not
    /// supply an explicit output path.
    #[serde(default = "default_backup_dir")]
    pub backup_dir: PathBuf,
}

fn default_backup_dir() -> PathBuf {
    PathBuf::from("backups")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backup_dir: default_backup_dir(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Cannot read {}: {}", path.display(), e)))?;
        toml::from_str(&raw).map_err(|e| Error::Config(format!("Cannot parse {}: {}", path.display(), e)))
    }

    /// Load configuration from a file if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backup_dir() {
        let config = Config::default();
        assert_eq!(config.backup_dir, PathBuf::from("backups"));
    }

    #[test]
    fn test_load_from_toml() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("barback.toml");
        fs::write(&path, "backup_dir = \"/var/lib/barback/backups\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.backup_dir, PathBuf::from("/var/lib/barback/backups"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("barback.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.backup_dir, PathBuf::from("backups"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load_or_default(Path::new("/nonexistent/barback.toml")).unwrap();
        assert_eq!(config.backup_dir, PathBuf::from("backups"));
    }
}
