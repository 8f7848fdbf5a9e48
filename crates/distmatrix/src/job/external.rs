use serde::{Deserialize, Serialize};
use std::fmt;

/// Filesystem root used to tell absolute paths apart from package names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathRoot(String);

impl PathRoot {
    pub fn new(root: impl Into<String>) -> Self {
        Self(root.into())
    }

    /// The `/` root of Unix-like hosts.
    pub fn unix() -> Self {
        Self("/".to_string())
    }

    /// Root of the host platform.
    ///
    /// Windows paths are rooted at a drive letter, so the root is taken from
    /// the drive of the working directory (`C:\` if that cannot be read).
    /// Every other platform uses `/`.
    pub fn current() -> Self {
        if cfg!(windows) {
            let root = std::env::current_dir()
                .ok()
                .and_then(|dir| dir.ancestors().last().map(|r| r.display().to_string()))
                .unwrap_or_else(|| "C:\\".to_string());
            Self(root)
        } else {
            Self::unix()
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PathRoot {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for PathRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rule deciding which module identifiers are left unbundled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Externals {
    /// Everything except relative (`.`) and absolute (root-prefixed) paths.
    ///
    /// Used by the ES module and CommonJS builds so that every dependency
    /// stays an import for the consumer's own bundler to resolve.
    BareSpecifiers { root: PathRoot },

    /// Exactly the listed identifiers; everything else is inlined.
    ///
    /// Used by UMD builds, which expect these peers as globals.
    Only { ids: Vec<String> },
}

impl Externals {
    pub fn bare_specifiers(root: PathRoot) -> Self {
        Self::BareSpecifiers { root }
    }

    pub fn only<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Only {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_external(&self, id: &str) -> bool {
        match self {
            Self::BareSpecifiers { root } => !id.starts_with('.') && !id.starts_with(root.as_str()),
            Self::Only { ids } => ids.iter().any(|known| known == id),
        }
    }
}
