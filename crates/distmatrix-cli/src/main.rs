//! distmatrix CLI - build matrix planner for multi-format library builds.
//!
//! Parses arguments, initializes logging, and dispatches to a command.

use clap::Parser;
use distmatrix_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let options = args.config_options();
    let result = match args.command {
        cli::Command::Plan(plan_args) => commands::plan_execute(plan_args, &options),
        cli::Command::Check(check_args) => commands::check_execute(check_args, &options),
        cli::Command::Init(init_args) => commands::init_execute(init_args),
        cli::Command::Schema => commands::schema_execute(),
        cli::Command::External(external_args) => {
            commands::external_execute(external_args, &options)
        }
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
