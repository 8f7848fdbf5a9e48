//! External command implementation.
//!
//! Reports, job by job, whether a module identifier stays an import or is
//! bundled into the output.

use crate::cli::ExternalArgs;
use crate::commands::utils;
use crate::config::{load_config, ConfigOptions, LayoutOverrides};
use crate::error::Result;
use crate::ui;

/// Execute the external command.
pub fn execute(args: ExternalArgs, options: &ConfigOptions) -> Result<()> {
    let cwd = utils::get_cwd()?;
    let config = load_config(options, &cwd, &LayoutOverrides::default())?;
    let jobs = config.plan()?;

    let mut external = 0;
    for job in &jobs {
        let verdict = if job.is_external(&args.id) {
            external += 1;
            "external"
        } else {
            "bundled"
        };
        println!("{:<40} {:<4} {}", job.output_file, job.kind(), verdict);
    }

    ui::info(&format!(
        "'{}' is external in {} of {} jobs",
        args.id,
        external,
        jobs.len()
    ));
    Ok(())
}
