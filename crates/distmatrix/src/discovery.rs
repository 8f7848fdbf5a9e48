//! File-based config discovery for CLI use
//!
//! Handles finding and loading matrix configuration files from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::MatrixConfig;
use crate::error::{ConfigError, Result};

pub const CONFIG_FILE_NAME: &str = "distmatrix.toml";

const PACKAGE_JSON: &str = "package.json";
const PACKAGE_FIELD: &str = "distmatrix";

/// File-based configuration discovery
///
/// Library users should build a [`MatrixConfig`] directly or use
/// [`MatrixConfig::from_value`].
///
/// # Example
///
/// ```no_run
/// use distmatrix::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. distmatrix.toml
    /// 2. package.json (distmatrix field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE_NAME);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join(PACKAGE_JSON);
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed = serde_json::from_str::<Value>(&content).ok()?;
        match parsed.get(PACKAGE_FIELD) {
            Some(field) if !field.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load config from the discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<MatrixConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        load_file(&path)
    }

    /// Load config and merge the named profile over it
    pub fn load_with_profile(&self, profile: &str) -> Result<MatrixConfig> {
        self.load()?.materialize_profile(Some(profile))
    }
}

/// Load config from a specific file.
///
/// `package.json` is read from its `distmatrix` field; any other file is
/// parsed as TOML.
pub fn load_file(path: &Path) -> Result<MatrixConfig> {
    tracing::debug!("Loading config from {}", path.display());

    if path.file_name() == Some(std::ffi::OsStr::new(PACKAGE_JSON)) {
        return load_package_json(path);
    }

    let content = fs::read_to_string(path)?;

    let table: toml::Table = toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: "toml".to_string(),
        hint: Some(format!("Invalid TOML syntax: {}", e)),
    })?;

    let value = serde_json::to_value(table).map_err(|e| ConfigError::InvalidValue {
        field: "toml".to_string(),
        hint: Some(format!("TOML to JSON conversion failed: {}", e)),
    })?;

    MatrixConfig::from_value(value)
}

fn load_package_json(path: &Path) -> Result<MatrixConfig> {
    let content = fs::read_to_string(path)?;

    let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: PACKAGE_JSON.to_string(),
        hint: Some(format!("Invalid JSON: {}", e)),
    })?;

    match parsed.get(PACKAGE_FIELD) {
        Some(value) if !value.is_null() => MatrixConfig::from_value(value.clone()),
        _ => Err(ConfigError::InvalidValue {
            field: PACKAGE_FIELD.to_string(),
            hint: Some("Add a 'distmatrix' field to your package.json".to_string()),
        }),
    }
}

/// Discover and load config from the current directory
pub fn discover() -> Result<MatrixConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

/// Discover and load config from the current directory with a profile
pub fn discover_with_profile(profile: &str) -> Result<MatrixConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_with_profile(profile)
}
