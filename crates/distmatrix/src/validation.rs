//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::MatrixConfig;
use crate::error::{ConfigError, Result};
use crate::job::BuildTarget;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &MatrixConfig) -> Result<()>;
}

/// Whether `name` can be used as a JavaScript global binding.
///
/// Must start with a letter, underscore, or dollar sign and continue with
/// letters, digits, underscores, or dollar signs.
///
/// ```
/// use distmatrix::is_identifier;
///
/// assert!(is_identifier("ReactSpringAddons"));
/// assert!(is_identifier("$jquery"));
/// assert!(!is_identifier("react-spring"));
/// assert!(!is_identifier("1up"));
/// ```
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if !first.is_alphabetic() && first != '_' && first != '$' {
        return false;
    }

    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Whether `name` is a dotted path of identifiers, such as
/// `ReactSpring.Addons`.
///
/// UMD wrappers create the intermediate namespace objects, so both export
/// names and peer globals may be nested.
///
/// ```
/// use distmatrix::is_global_path;
///
/// assert!(is_global_path("React"));
/// assert!(is_global_path("React.DOM"));
/// assert!(!is_global_path("React."));
/// assert!(!is_global_path("react-dom"));
/// ```
pub fn is_global_path(name: &str) -> bool {
    name.split('.').all(is_identifier)
}

/// Check every target before any job is derived from them.
///
/// An absent or blank global name is valid: the target simply gets no UMD
/// build.
pub fn validate_targets(targets: &[BuildTarget]) -> Result<()> {
    let mut seen = HashSet::with_capacity(targets.len());

    for (index, target) in targets.iter().enumerate() {
        if target.entry.to_string_lossy().trim().is_empty() {
            return Err(ConfigError::InvalidTarget {
                index,
                message: "entry path is required".to_string(),
            });
        }

        if target.out.trim().is_empty() {
            return Err(ConfigError::InvalidTarget {
                index,
                message: "output name is required".to_string(),
            });
        }

        if target.out.contains(['/', '\\']) {
            return Err(ConfigError::InvalidTarget {
                index,
                message: format!(
                    "output name '{}' must be a file name, not a path",
                    target.out
                ),
            });
        }

        if let Some(global) = target.global_name() {
            if !is_global_path(global) {
                return Err(ConfigError::InvalidTarget {
                    index,
                    message: format!(
                        "global name '{global}' is not a valid JavaScript identifier path"
                    ),
                });
            }
        }

        if !seen.insert(target.out.as_str()) {
            return Err(ConfigError::DuplicateOutput {
                out: target.out.clone(),
            });
        }
    }

    Ok(())
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use distmatrix::{BuildTarget, ConfigValidator, MatrixConfig, SchemaValidator};
///
/// let mut config = MatrixConfig::default();
/// config.targets.push(BuildTarget::new("targets/web/index", "hooks"));
///
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &MatrixConfig) -> Result<()> {
        if config.targets.is_empty() {
            return Err(ConfigError::NoTargets);
        }

        validate_targets(&config.targets)?;

        for (id, name) in config.globals.iter() {
            if id.trim().is_empty() {
                return Err(ConfigError::InvalidGlobal {
                    id: id.to_string(),
                    message: "module id cannot be empty".to_string(),
                });
            }
            if !is_global_path(name) {
                return Err(ConfigError::InvalidGlobal {
                    id: id.to_string(),
                    message: format!("'{name}' is not a valid JavaScript identifier path"),
                });
            }
        }

        if config.extension.trim().is_empty() || config.extension.starts_with('.') {
            return Err(ConfigError::InvalidValue {
                field: "extension".to_string(),
                hint: Some("Use an extension without the leading dot, e.g. \"js\"".to_string()),
            });
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs schema validation, then checks that every entry file exists.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &MatrixConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for path in config.entry_files() {
            let path = self.root.join(path);
            if !path.exists() {
                return Err(ConfigError::EntryNotFound { path });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &MatrixConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &MatrixConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
