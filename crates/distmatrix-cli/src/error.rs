//! Error handling for the distmatrix CLI.
//!
//! - `CliError` is the top-level error returned by commands
//! - Library errors convert automatically via `#[from]`
//! - `ResultExt` attaches file paths, hints, or context to errors
//!
//! # Example
//!
//! ```rust,no_run
//! use distmatrix_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_config(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_path(path)
//!         .with_hint("Run 'distmatrix init' to create one")
//! }
//! ```

mod report;

use std::path::PathBuf;
use thiserror::Error;

pub use distmatrix::ConfigError;
pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Refusing to overwrite an existing file
    #[error("File already exists: {}", .0.display())]
    FileExists(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

impl CliError {
    /// Suggested fix shown under the error, if there is an obvious one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Config(ConfigError::NotFound) => {
                Some("Create distmatrix.toml with 'distmatrix init' or pass --config <PATH>")
            }
            Self::Config(ConfigError::NoTargets) => {
                Some("Add at least one [[targets]] entry with 'entry' and 'out'")
            }
            Self::Config(ConfigError::EntryNotFound { .. }) => {
                Some("Check 'source_dir' and 'extension', or fix the target's 'entry'")
            }
            Self::Config(ConfigError::ProfileNotFound(_)) => {
                Some("Declare the profile under [profiles.<name>] in the config file")
            }
            Self::FileExists(_) => Some("Pass --force to overwrite it"),
            _ => None,
        }
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}
