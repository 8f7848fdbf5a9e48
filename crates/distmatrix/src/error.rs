//! Error types for configuration loading and matrix validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Target validation errors (raised before any job is generated)
    #[error("target #{index}: {message}")]
    InvalidTarget { index: usize, message: String },

    #[error("output '{out}' is declared by more than one target")]
    DuplicateOutput { out: String },

    #[error("invalid global mapping for '{id}': {message}")]
    InvalidGlobal { id: String, message: String },

    #[error("no targets specified")]
    NoTargets,

    // Filesystem validation errors (for CLI use)
    #[error("entry not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    // Config parsing/loading errors
    #[error("config not found")]
    NotFound,

    #[error("invalid config value for '{field}'{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("profile '{0}' is not defined")]
    ProfileNotFound(String),

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
