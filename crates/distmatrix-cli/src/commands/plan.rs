//! Plan command implementation.
//!
//! Loads the configuration and prints the build jobs it expands to.

use crate::cli::PlanArgs;
use crate::commands::utils;
use crate::config::{load_config, ConfigOptions, LayoutOverrides};
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the plan command.
///
/// Prints a table, or a JSON array of jobs with `--json`, to stdout.
pub fn execute(args: PlanArgs, options: &ConfigOptions) -> Result<()> {
    let cwd = utils::get_cwd()?;
    let flags = LayoutOverrides {
        source_dir: args.source_dir,
        out_dir: args.out_dir,
        extension: None,
    };

    let config = load_config(options, &cwd, &flags)?;
    let jobs = config.plan()?;
    tracing::info!(
        "Planned {} jobs for {} targets",
        jobs.len(),
        config.targets.len()
    );

    if args.json {
        let json =
            serde_json::to_string_pretty(&jobs).context("Failed to serialize build jobs")?;
        println!("{}", json);
    } else {
        ui::print_plan(&jobs);
        ui::print_plan_summary(&jobs, config.targets.len());
    }

    Ok(())
}
