use serde::{Deserialize, Serialize};

/// Glob matching third-party code, skipped by the transpiler and the only
/// code converted from CommonJS.
pub const NODE_MODULES_GLOB: &str = "**/node_modules/**";

/// How the transpiler references its runtime helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HelperStyle {
    /// Helpers are imported from their ES module builds
    ModulePreserving,
    /// Helpers are required from their CommonJS builds
    Inlined,
}

impl HelperStyle {
    pub const fn uses_es_modules(self) -> bool {
        matches!(self, Self::ModulePreserving)
    }
}

/// Options forwarded to the transpiler stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranspileOptions {
    pub helpers: HelperStyle,
    /// Files the transpiler leaves untouched
    pub exclude: String,
    /// Import helpers from the runtime package instead of inlining them per file
    pub runtime_helpers: bool,
    /// Rewrite generators with regenerator
    pub regenerator: bool,
}

impl TranspileOptions {
    pub fn new(helpers: HelperStyle) -> Self {
        Self {
            helpers,
            exclude: NODE_MODULES_GLOB.to_string(),
            runtime_helpers: true,
            regenerator: false,
        }
    }
}

/// A transform stage applied by the external bundler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage")]
pub enum Stage {
    /// Resolve bare imports against `node_modules`
    #[serde(rename = "resolve")]
    ResolveNodeModules,
    #[serde(rename = "transpile")]
    Transpile(TranspileOptions),
    /// Convert CommonJS dependencies matching `include` to ES modules
    #[serde(rename = "inline-commonjs")]
    InlineCommonJs { include: String },
    /// Record the output size for regression tracking
    #[serde(rename = "snapshot")]
    SizeSnapshot,
    #[serde(rename = "minify")]
    Minify,
}

impl Stage {
    pub fn transpile(helpers: HelperStyle) -> Self {
        Self::Transpile(TranspileOptions::new(helpers))
    }

    pub fn inline_commonjs() -> Self {
        Self::InlineCommonJs {
            include: NODE_MODULES_GLOB.to_string(),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::ResolveNodeModules => "resolve",
            Self::Transpile(_) => "transpile",
            Self::InlineCommonJs { .. } => "inline-commonjs",
            Self::SizeSnapshot => "snapshot",
            Self::Minify => "minify",
        }
    }
}
