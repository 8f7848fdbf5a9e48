//! Build matrix generation for multi-format library distributions.
//!
//! A library declares a handful of entry points. Each one is compiled into an
//! ES module build and a CommonJS build, plus a minified UMD build when the
//! entry exposes a global name. This crate turns that declaration into an
//! ordered list of [`BuildJob`]s that an external bundler can execute.
//!
//! # Example
//!
//! ```
//! use distmatrix::{generate_jobs, BuildTarget, GlobalsMap, OutputFormat};
//!
//! let targets = vec![BuildTarget::new("targets/web/index", "hooks")];
//! let jobs = generate_jobs(&targets, &GlobalsMap::new()).unwrap();
//!
//! assert_eq!(jobs.len(), 2);
//! assert_eq!(jobs[0].output_file, "hooks.js");
//! assert_eq!(jobs[1].kind(), OutputFormat::CommonJs);
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod generator;
pub mod job;
pub mod validation;

pub use config::*;
pub use error::*;
pub use generator::{generate_jobs, MatrixGenerator};
pub use job::*;

pub use discovery::{discover, discover_with_profile, load_file, ConfigDiscovery, CONFIG_FILE_NAME};
pub use validation::{
    is_global_path, is_identifier, validate_fs, validate_schema, validate_targets,
    ConfigValidator, FsValidator, SchemaValidator,
};
