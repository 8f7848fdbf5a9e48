use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::validation::parse_module_id;

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the build jobs for the configured targets
    ///
    /// Each target produces an ES module and a CommonJS job, plus a UMD job
    /// when it declares a global name.
    Plan(PlanArgs),

    /// Validate configuration and check that every entry file exists
    Check(CheckArgs),

    /// Write the reference configuration to distmatrix.toml
    Init(InitArgs),

    /// Print the JSON schema of distmatrix.toml
    Schema,

    /// Show which jobs leave a module identifier unbundled
    External(ExternalArgs),
}

/// Arguments for the plan command
#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Print jobs as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Override the output directory
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Override the source directory entries are resolved against
    #[arg(short = 's', long, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Project root entry files are resolved against
    ///
    /// Defaults to the current working directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Arguments for the init command
#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Overwrite an existing distmatrix.toml
    #[arg(short, long)]
    pub force: bool,

    /// Directory to write distmatrix.toml into
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

/// Arguments for the external command
#[derive(Args, Debug)]
pub struct ExternalArgs {
    /// Module identifier as it appears in an import (e.g. "react", "./utils")
    #[arg(value_parser = parse_module_id, value_name = "ID")]
    pub id: String,
}
