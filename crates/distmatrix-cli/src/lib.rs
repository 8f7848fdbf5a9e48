//! Command-line interface for the `distmatrix` build matrix planner.
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing with clap
//! - [`commands`] - One module per subcommand
//! - [`config`] - Configuration loading with file, environment and flag layers
//! - [`error`] - Error types and miette conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages and the plan table

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
