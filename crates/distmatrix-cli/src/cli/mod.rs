//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `distmatrix plan` - Print the build jobs for the configured targets
//! - `distmatrix check` - Validate configuration and entry files
//! - `distmatrix init` - Write the reference configuration
//! - `distmatrix schema` - Print the JSON schema of the config file
//! - `distmatrix external` - Show which jobs leave a module unbundled

mod commands;
mod validation;

use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOptions;

pub use commands::{CheckArgs, Command, ExternalArgs, InitArgs, PlanArgs};
pub use validation::parse_module_id;

/// distmatrix - plan multi-format builds for a JavaScript library
#[derive(Parser, Debug)]
#[command(
    name = "distmatrix",
    version,
    about = "Plan ES module, CommonJS and UMD builds for a JavaScript library",
    long_about = "distmatrix expands a list of library entry points into build jobs.\n\
                  Every entry gets an ES module and a CommonJS build; entries with a\n\
                  global name also get a minified UMD build."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to the configuration file
    ///
    /// Defaults to distmatrix.toml, then the "distmatrix" field of
    /// package.json, in the current directory.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Profile to merge over the base configuration
    #[arg(short, long, global = true, value_name = "NAME")]
    pub profile: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Config-related global flags, detached from the subcommand.
    pub fn config_options(&self) -> ConfigOptions {
        ConfigOptions {
            config: self.config.clone(),
            profile: self.profile.clone(),
        }
    }
}
