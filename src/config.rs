//! Scan configuration
//!
//! Values are resolved in layers: built-in defaults, then an optional JSON
//! config file, then command-line overrides applied by the caller.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::scanner::StoreKind;

pub const DEFAULT_OBJECT_STORE: &str = "/repo_data/fedora/fedora36_prod/objectStore/";
pub const DEFAULT_DATASTREAM_STORE: &str = "/repo_data/fedora/fedora36_prod/datastreamStore/";
pub const DEFAULT_LARGEST_N: usize = 20;

/// What to do with a file whose name carries no namespace
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnparsedPolicy {
    /// Count the file under its own file name
    #[default]
    Filename,
    /// Abort the scan
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub object_store_root: PathBuf,
    pub datastream_store_root: PathBuf,
    pub largest_n: usize,
    pub unparsed: UnparsedPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            object_store_root: PathBuf::from(DEFAULT_OBJECT_STORE),
            datastream_store_root: PathBuf::from(DEFAULT_DATASTREAM_STORE),
            largest_n: DEFAULT_LARGEST_N,
            unparsed: UnparsedPolicy::default(),
        }
    }
}

impl Config {
    /// Default config file location, e.g. `~/.config/fedora-summary/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fedora-summary").join("config.json"))
    }

    /// Read a config file. Fields missing from the file keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load from an explicit path, or from the default location if a file
    /// exists there, or fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Root directory of the given store
    pub fn store_root(&self, kind: StoreKind) -> &Path {
        match kind {
            StoreKind::Object => &self.object_store_root,
            StoreKind::Datastream => &self.datastream_store_root,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.largest_n == 0 {
            bail!("largest_n must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.object_store_root, PathBuf::from(DEFAULT_OBJECT_STORE));
        assert_eq!(config.datastream_store_root, PathBuf::from(DEFAULT_DATASTREAM_STORE));
        assert_eq!(config.largest_n, 20);
        assert_eq!(config.unparsed, UnparsedPolicy::Filename);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_store_root() {
        let config = Config::default();
        assert_eq!(config.store_root(StoreKind::Object), Path::new(DEFAULT_OBJECT_STORE));
        assert_eq!(
            config.store_root(StoreKind::Datastream),
            Path::new(DEFAULT_DATASTREAM_STORE)
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"largest_n": 5, "unparsed": "error"}"#).unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.largest_n, 5);
        assert_eq!(config.unparsed, UnparsedPolicy::Error);
        assert_eq!(config.object_store_root, PathBuf::from(DEFAULT_OBJECT_STORE));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("Could not read config file"));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_zero_largest_n_rejected() {
        let config = Config {
            largest_n: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
