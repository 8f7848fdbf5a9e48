//! Expansion of build targets into build jobs.
//!
//! The generator is a pure transform: targets and globals in, jobs out. It
//! touches no files and keeps no state between calls.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::job::{
    BuildJob, BuildTarget, Externals, GlobalsMap, HelperStyle, JobFormat, PathRoot, Stage,
};
use crate::validation::validate_targets;

pub(crate) const DEFAULT_SOURCE_DIR: &str = "src";
pub(crate) const DEFAULT_OUT_DIR: &str = "dist";
pub(crate) const DEFAULT_EXTENSION: &str = "js";

/// Layout and policy applied while expanding targets.
///
/// # Example
///
/// ```
/// use distmatrix::{BuildTarget, GlobalsMap, MatrixGenerator, PathRoot};
///
/// let generator = MatrixGenerator::new()
///     .source_dir("lib")
///     .out_dir("build")
///     .path_root(PathRoot::unix());
///
/// let targets = [BuildTarget::new("index", "core")];
/// let jobs = generator.generate(&targets, &GlobalsMap::new()).unwrap();
/// assert_eq!(jobs[0].input_file, std::path::Path::new("lib/index.js"));
/// assert_eq!(jobs[1].output_path(), std::path::Path::new("build/core.cjs.js"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGenerator {
    source_dir: PathBuf,
    out_dir: PathBuf,
    extension: String,
    path_root: PathRoot,
    snapshot_esm: bool,
}

impl Default for MatrixGenerator {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            path_root: PathRoot::current(),
            snapshot_esm: false,
        }
    }
}

impl MatrixGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    /// Extension appended to every entry path (without the leading dot).
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = ext.into();
        self
    }

    pub fn path_root(mut self, root: PathRoot) -> Self {
        self.path_root = root;
        self
    }

    /// Also record a size snapshot for ES module builds.
    pub fn snapshot_esm(mut self, enabled: bool) -> Self {
        self.snapshot_esm = enabled;
        self
    }

    /// Expand `targets` into jobs, in target order.
    ///
    /// Every target is validated before the first job is produced, so an
    /// invalid declaration never yields a partial matrix.
    pub fn generate(&self, targets: &[BuildTarget], globals: &GlobalsMap) -> Result<Vec<BuildJob>> {
        validate_targets(targets)?;

        let mut jobs = Vec::with_capacity(targets.len() * 3);
        for target in targets {
            let input_file = self.entry_file(&target.entry);

            let mut formats = vec![JobFormat::EsModule, JobFormat::CommonJs];
            if let Some(name) = target.global_name() {
                formats.push(JobFormat::Umd {
                    name: name.to_string(),
                    globals: globals.clone(),
                });
            }

            for format in formats {
                let job = self.job(target, format, &input_file);
                tracing::debug!(
                    "Planned {} build {} -> {}",
                    job.kind(),
                    job.input_file.display(),
                    job.output_path().display()
                );
                jobs.push(job);
            }
        }

        Ok(jobs)
    }

    fn job(&self, target: &BuildTarget, format: JobFormat, input_file: &Path) -> BuildJob {
        let (external, stages) = match &format {
            JobFormat::EsModule => {
                let mut stages = vec![Stage::transpile(HelperStyle::ModulePreserving)];
                if self.snapshot_esm {
                    stages.push(Stage::SizeSnapshot);
                }
                (Externals::bare_specifiers(self.path_root.clone()), stages)
            }
            JobFormat::CommonJs => (
                Externals::bare_specifiers(self.path_root.clone()),
                vec![Stage::transpile(HelperStyle::Inlined)],
            ),
            JobFormat::Umd { globals, .. } => (Externals::only(globals.ids()), umd_stages()),
        };

        BuildJob {
            input_file: input_file.to_path_buf(),
            output_dir: self.out_dir.clone(),
            output_file: format.kind().file_name(&target.out),
            format,
            external,
            stages,
        }
    }

    /// Path of an entry module: `{source_dir}/{entry}.{extension}`.
    pub fn entry_file(&self, entry: &Path) -> PathBuf {
        let mut file = entry.as_os_str().to_owned();
        file.push(".");
        file.push(&self.extension);
        self.source_dir.join(file)
    }
}

/// Resolution runs before transpilation so dependencies are transpiled too;
/// minification runs last so the snapshot records the unminified size.
fn umd_stages() -> Vec<Stage> {
    vec![
        Stage::ResolveNodeModules,
        Stage::transpile(HelperStyle::ModulePreserving),
        Stage::inline_commonjs(),
        Stage::SizeSnapshot,
        Stage::Minify,
    ]
}

/// Expand `targets` with the default layout (`src/*.js` into `dist/`).
pub fn generate_jobs(targets: &[BuildTarget], globals: &GlobalsMap) -> Result<Vec<BuildJob>> {
    MatrixGenerator::default().generate(targets, globals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::job::OutputFormat;

    fn react_globals() -> GlobalsMap {
        GlobalsMap::new()
            .with("react", "React")
            .with("react-dom", "ReactDOM")
            .with("prop-types", "PropTypes")
            .with("react-spring", "ReactSpring")
    }

    #[test]
    fn target_without_global_yields_esm_and_cjs() {
        let targets = [BuildTarget::new("targets/web/index", "hooks")];
        let jobs = generate_jobs(&targets, &react_globals()).unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].output_file, "hooks.js");
        assert_eq!(jobs[0].kind(), OutputFormat::EsModule);
        assert_eq!(jobs[1].output_file, "hooks.cjs.js");
        assert_eq!(jobs[1].kind(), OutputFormat::CommonJs);
        assert_eq!(jobs[0].input_file, PathBuf::from("src/targets/web/index.js"));
        assert_eq!(jobs[0].input_file, jobs[1].input_file);
    }

    #[test]
    fn target_with_global_yields_umd_last() {
        let targets = [BuildTarget::new("renderprops/addons/index", "renderprops-addons")
            .with_global("ReactSpringAddons")];
        let jobs = generate_jobs(&targets, &react_globals()).unwrap();

        assert_eq!(jobs.len(), 3);
        let umd = &jobs[2];
        assert_eq!(umd.output_file, "renderprops-addons.umd.js");
        assert_eq!(umd.kind(), OutputFormat::Umd);
        assert_eq!(umd.global_name(), Some("ReactSpringAddons"));
        assert_eq!(
            umd.stage_names(),
            vec!["resolve", "transpile", "inline-commonjs", "snapshot", "minify"]
        );
    }

    #[test]
    fn blank_global_name_skips_umd() {
        let targets = [
            BuildTarget::new("targets/web/index", "hooks").with_global(""),
            BuildTarget::new("targets/native/index", "native").with_global("  "),
        ];
        let jobs = generate_jobs(&targets, &react_globals()).unwrap();

        assert_eq!(jobs.len(), 4);
        assert!(jobs.iter().all(|job| job.kind() != OutputFormat::Umd));
    }

    #[test]
    fn namespaced_global_name_is_accepted() {
        let targets = [BuildTarget::new("renderprops/addons/index", "renderprops-addons")
            .with_global("ReactSpring.Addons")];
        let jobs = generate_jobs(&targets, &react_globals()).unwrap();

        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[2].global_name(), Some("ReactSpring.Addons"));
    }

    #[test]
    fn blank_entry_fails() {
        let targets = [BuildTarget::new("   ", "hooks")];
        let err = generate_jobs(&targets, &GlobalsMap::new()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTarget { index: 0, .. }));
    }

    #[test]
    fn transpile_helpers_follow_format() {
        let targets = [BuildTarget::new("index", "lib").with_global("Lib")];
        let jobs = generate_jobs(&targets, &GlobalsMap::new()).unwrap();

        let helpers: Vec<_> = jobs
            .iter()
            .map(|job| {
                job.stages
                    .iter()
                    .find_map(|stage| match stage {
                        Stage::Transpile(options) => Some(options.helpers),
                        _ => None,
                    })
                    .unwrap()
            })
            .collect();
        assert_eq!(
            helpers,
            vec![
                HelperStyle::ModulePreserving,
                HelperStyle::Inlined,
                HelperStyle::ModulePreserving
            ]
        );
    }

    #[test]
    fn umd_externalizes_only_globals() {
        let targets = [BuildTarget::new("index", "lib").with_global("Lib")];
        let jobs = generate_jobs(&targets, &react_globals()).unwrap();
        let umd = &jobs[2];

        assert!(umd.is_external("react"));
        assert!(umd.is_external("react-spring"));
        assert!(!umd.is_external("lodash"));
        assert!(!umd.is_external("./helpers"));

        let esm = &jobs[0];
        assert!(esm.is_external("lodash"));
        assert!(!esm.is_external("./helpers"));
    }

    #[test]
    fn esm_snapshot_is_opt_in() {
        let targets = [BuildTarget::new("index", "lib")];

        let jobs = MatrixGenerator::new()
            .generate(&targets, &GlobalsMap::new())
            .unwrap();
        assert_eq!(jobs[0].stage_names(), vec!["transpile"]);

        let jobs = MatrixGenerator::new()
            .snapshot_esm(true)
            .generate(&targets, &GlobalsMap::new())
            .unwrap();
        assert_eq!(jobs[0].stage_names(), vec!["transpile", "snapshot"]);
        assert_eq!(jobs[1].stage_names(), vec!["transpile"]);
    }

    #[test]
    fn custom_extension_applies_to_input_only() {
        let targets = [BuildTarget::new("index", "lib")];
        let jobs = MatrixGenerator::new()
            .extension("mjs")
            .generate(&targets, &GlobalsMap::new())
            .unwrap();
        assert_eq!(jobs[0].input_file, PathBuf::from("src/index.mjs"));
        assert_eq!(jobs[0].output_file, "lib.js");
    }

    #[test]
    fn invalid_target_fails_before_any_job() {
        let targets = [
            BuildTarget::new("targets/web/index", "hooks"),
            BuildTarget::new("", "broken"),
        ];
        let err = generate_jobs(&targets, &GlobalsMap::new()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTarget { index: 1, .. }));
    }

    #[test]
    fn empty_input_yields_no_jobs() {
        let jobs = generate_jobs(&[], &react_globals()).unwrap();
        assert!(jobs.is_empty());
    }

    #[test]
    fn generation_is_idempotent() {
        let targets = [
            BuildTarget::new("targets/web/index", "hooks"),
            BuildTarget::new("renderprops/addons/index", "renderprops-addons")
                .with_global("ReactSpringAddons"),
        ];
        let generator = MatrixGenerator::new().path_root(PathRoot::unix());
        let first = generator.generate(&targets, &react_globals()).unwrap();
        let second = generator.generate(&targets, &react_globals()).unwrap();
        assert_eq!(first, second);
    }
}
