//! Matrix configuration and profile merging.
//!
//! For file discovery, see the `discovery` module.

use std::path::PathBuf;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::generator::{MatrixGenerator, DEFAULT_EXTENSION, DEFAULT_OUT_DIR, DEFAULT_SOURCE_DIR};
use crate::job::{BuildJob, BuildTarget, GlobalsMap};
use crate::validation::validate_schema;

/// Declarative build matrix: which entries to build and where.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatrixConfig {
    /// Directory entry paths are relative to
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Directory every artifact is written to
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Extension of entry modules, without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Peer libraries UMD builds read from the global scope
    #[serde(default)]
    pub globals: GlobalsMap,

    #[serde(default)]
    pub size_snapshot: SizeSnapshotOptions,

    /// Library entry points, built in declaration order
    #[serde(default)]
    pub targets: Vec<BuildTarget>,

    /// Named overrides merged over the base configuration
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub profiles: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SizeSnapshotOptions {
    /// Record a size snapshot for ES module builds as well as UMD builds
    #[serde(default)]
    pub esm: bool,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_DIR)
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUT_DIR)
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            out_dir: default_out_dir(),
            extension: default_extension(),
            globals: GlobalsMap::default(),
            size_snapshot: SizeSnapshotOptions::default(),
            targets: Vec::new(),
            profiles: IndexMap::new(),
        }
    }
}

impl MatrixConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use distmatrix::MatrixConfig;
    /// use serde_json::json;
    ///
    /// let config = MatrixConfig::from_value(json!({
    ///     "targets": [{ "entry": "targets/web/index", "out": "hooks" }]
    /// }))
    /// .unwrap();
    /// assert_eq!(config.targets[0].out, "hooks");
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// The react-spring distribution: seven entries, one of which also
    /// ships a UMD build, with React and friends expected as globals.
    pub fn reference() -> Self {
        let globals = GlobalsMap::new()
            .with("react", "React")
            .with("react-dom", "ReactDOM")
            .with("prop-types", "PropTypes")
            .with("react-spring", "ReactSpring");

        let targets = vec![
            BuildTarget::new("targets/web/index", "hooks"),
            BuildTarget::new("targets/native/index", "native"),
            BuildTarget::new("renderprops/targets/web/index", "renderprops"),
            BuildTarget::new("renderprops/addons/index", "renderprops-addons")
                .with_global("ReactSpringAddons"),
            BuildTarget::new("renderprops/targets/native/index", "renderprops-native"),
            BuildTarget::new("renderprops/targets/universal/index", "renderprops-universal"),
            BuildTarget::new("renderprops/targets/konva/index", "renderprops-konva"),
        ];

        Self {
            globals,
            targets,
            ..Self::default()
        }
    }

    /// Generator carrying this configuration's layout.
    pub fn generator(&self) -> MatrixGenerator {
        MatrixGenerator::new()
            .source_dir(&self.source_dir)
            .out_dir(&self.out_dir)
            .extension(&self.extension)
            .snapshot_esm(self.size_snapshot.esm)
    }

    /// Validate the configuration and expand it into build jobs.
    pub fn plan(&self) -> Result<Vec<BuildJob>> {
        validate_schema(self)?;
        let jobs = self.generator().generate(&self.targets, &self.globals)?;
        tracing::debug!(
            "Planned {} jobs for {} targets",
            jobs.len(),
            self.targets.len()
        );
        Ok(jobs)
    }

    /// Entry files relative to the project root, in target order.
    pub fn entry_files(&self) -> Vec<PathBuf> {
        let generator = self.generator();
        self.targets
            .iter()
            .map(|target| generator.entry_file(&target.entry))
            .collect()
    }

    /// Merge the named profile over the base configuration.
    ///
    /// Objects merge key by key; arrays and scalars replace the base value.
    pub fn materialize_profile(self, profile: Option<&str>) -> Result<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };

        let overrides = self
            .profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))?;

        if overrides.is_null() {
            return Ok(self);
        }

        let profiles = self.profiles.clone();
        let mut base = serde_json::to_value(&self).map_err(|err| {
            ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            }
        })?;
        merge_values(&mut base, &overrides);

        let mut merged: MatrixConfig =
            serde_json::from_value(base).map_err(|err| ConfigError::InvalidProfileOverride {
                message: format!("profile '{name}': {err}"),
            })?;
        merged.profiles = profiles;

        tracing::debug!("Applied profile '{}'", name);
        Ok(merged)
    }
}

fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
