use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::GlobalsMap;

/// Module format of an emitted artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum OutputFormat {
    /// ECMAScript module (`import`/`export`)
    #[serde(rename = "esm")]
    EsModule,
    /// CommonJS (`require`/`module.exports`)
    #[serde(rename = "cjs")]
    CommonJs,
    /// Universal module definition, usable from a `<script>` tag
    #[serde(rename = "umd")]
    Umd,
}

impl OutputFormat {
    /// Short name used in serialized jobs and terminal output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EsModule => "esm",
            Self::CommonJs => "cjs",
            Self::Umd => "umd",
        }
    }

    /// Infix inserted between the base name and `.js`; none for ES modules.
    pub const fn suffix(self) -> Option<&'static str> {
        match self {
            Self::EsModule => None,
            Self::CommonJs => Some("cjs"),
            Self::Umd => Some("umd"),
        }
    }

    /// Output file name for a target's base name.
    ///
    /// ```
    /// use distmatrix::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::EsModule.file_name("hooks"), "hooks.js");
    /// assert_eq!(OutputFormat::CommonJs.file_name("hooks"), "hooks.cjs.js");
    /// assert_eq!(OutputFormat::Umd.file_name("hooks"), "hooks.umd.js");
    /// ```
    pub fn file_name(self, base: &str) -> String {
        match self.suffix() {
            Some(suffix) => format!("{base}.{suffix}.js"),
            None => format!("{base}.js"),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Format of a concrete job. UMD carries what the runtime wrapper needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format")]
pub enum JobFormat {
    #[serde(rename = "esm")]
    EsModule,
    #[serde(rename = "cjs")]
    CommonJs,
    #[serde(rename = "umd")]
    Umd {
        /// Global binding the bundle assigns its exports to
        name: String,
        /// Peer libraries read from the global scope
        globals: GlobalsMap,
    },
}

impl JobFormat {
    pub fn kind(&self) -> OutputFormat {
        match self {
            Self::EsModule => OutputFormat::EsModule,
            Self::CommonJs => OutputFormat::CommonJs,
            Self::Umd { .. } => OutputFormat::Umd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_match_serde() {
        for format in [OutputFormat::EsModule, OutputFormat::CommonJs, OutputFormat::Umd] {
            let value = serde_json::to_value(format).unwrap();
            assert_eq!(value, serde_json::json!(format.as_str()));
        }
    }

    #[test]
    fn umd_job_format_serializes_inline() {
        let format = JobFormat::Umd {
            name: "ReactSpringAddons".to_string(),
            globals: GlobalsMap::new().with("react", "React"),
        };
        let value = serde_json::to_value(&format).unwrap();
        assert_eq!(value["format"], "umd");
        assert_eq!(value["name"], "ReactSpringAddons");
        assert_eq!(value["globals"]["react"], "React");
    }
}
