use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::OutputFormat;

/// A library entry point and the name its artifacts share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BuildTarget {
    /// Entry module relative to the source directory, without extension
    pub entry: PathBuf,

    /// Base name of every output file produced for this entry
    pub out: String,

    /// Global binding of the UMD build; no UMD build is produced without it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<String>,
}

impl BuildTarget {
    pub fn new(entry: impl Into<PathBuf>, out: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            out: out.into(),
            global: None,
        }
    }

    pub fn with_global(mut self, name: impl Into<String>) -> Self {
        self.global = Some(name.into());
        self
    }

    /// Global name of the UMD build, if one is declared.
    ///
    /// A blank name counts as no name.
    pub fn global_name(&self) -> Option<&str> {
        self.global.as_deref().filter(|name| !name.trim().is_empty())
    }

    /// Formats this target is built into.
    ///
    /// ES module and CommonJS are unconditional; a global name adds UMD.
    pub fn formats(&self) -> Vec<OutputFormat> {
        let mut formats = vec![OutputFormat::EsModule, OutputFormat::CommonJs];
        if self.global_name().is_some() {
            formats.push(OutputFormat::Umd);
        }
        formats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_name_adds_umd() {
        let plain = BuildTarget::new("targets/web/index", "hooks");
        assert_eq!(
            plain.formats(),
            vec![OutputFormat::EsModule, OutputFormat::CommonJs]
        );

        let with_global = plain.with_global("ReactSpringHooks");
        assert_eq!(with_global.formats().last(), Some(&OutputFormat::Umd));
    }

    #[test]
    fn blank_global_name_skips_umd() {
        for blank in ["", "   "] {
            let target = BuildTarget::new("targets/web/index", "hooks").with_global(blank);
            assert_eq!(target.global_name(), None);
            assert_eq!(
                target.formats(),
                vec![OutputFormat::EsModule, OutputFormat::CommonJs]
            );
        }
    }

    #[test]
    fn global_is_omitted_when_absent() {
        let value = serde_json::to_value(BuildTarget::new("a/index", "a")).unwrap();
        assert!(value.get("global").is_none());
    }
}
