//! Build targets and the jobs derived from them.

mod external;
mod format;
mod globals;
mod stage;
mod target;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use external::{Externals, PathRoot};
pub use format::{JobFormat, OutputFormat};
pub use globals::GlobalsMap;
pub use stage::{HelperStyle, Stage, TranspileOptions, NODE_MODULES_GLOB};
pub use target::BuildTarget;

/// One bundler invocation: a single entry compiled into a single format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildJob {
    /// Entry module on disk, including the source directory and extension
    pub input_file: PathBuf,

    /// Directory the output file is written to
    pub output_dir: PathBuf,

    /// Output file name (`{out}.js`, `{out}.cjs.js` or `{out}.umd.js`)
    pub output_file: String,

    /// Module format, with the UMD wrapper settings for UMD jobs
    #[serde(flatten)]
    pub format: JobFormat,

    /// Which imports stay unbundled
    pub external: Externals,

    /// Transform stages, applied in order
    pub stages: Vec<Stage>,
}

impl BuildJob {
    /// Full path of the emitted artifact.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    pub fn kind(&self) -> OutputFormat {
        self.format.kind()
    }

    /// Global export name of a UMD job.
    pub fn global_name(&self) -> Option<&str> {
        match &self.format {
            JobFormat::Umd { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Whether `id` is left as an import instead of being bundled.
    pub fn is_external(&self, id: &str) -> bool {
        self.external.is_external(id)
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(Stage::name).collect()
    }
}
