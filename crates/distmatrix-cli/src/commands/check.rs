//! Check command implementation.
//!
//! Validates configuration and entry files without planning.

use distmatrix::{validate_schema, ConfigValidator, FsValidator};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::config::{load_config, ConfigOptions, LayoutOverrides};
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the configuration (file, profile, environment)
/// 2. Validate targets and globals
/// 3. Check that every entry file exists under the project root
///
/// # Errors
///
/// Returns the first configuration error, or `EntryNotFound` after listing
/// every missing entry.
pub fn execute(args: CheckArgs, options: &ConfigOptions) -> Result<()> {
    ui::info("Checking configuration...");

    let cwd = utils::get_cwd()?;
    let config = load_config(options, &cwd, &LayoutOverrides::default())?;
    validate_schema(&config)?;
    ui::success(&format!(
        "Configuration is valid ({} targets, {} globals)",
        config.targets.len(),
        config.globals.len()
    ));

    ui::info("Checking entry points...");
    let root = match &args.root {
        Some(root) => utils::resolve_path(root, &cwd),
        None => cwd,
    };

    let mut missing = 0;
    for (target, entry) in config.targets.iter().zip(config.entry_files()) {
        let formats: Vec<_> = target.formats().iter().map(|f| f.as_str()).collect();
        if root.join(&entry).exists() {
            ui::success(&format!(
                "  {} → {} [{}]",
                entry.display(),
                target.out,
                formats.join(", ")
            ));
        } else {
            ui::error(&format!("  {} is missing", entry.display()));
            missing += 1;
        }
    }

    if missing > 0 {
        ui::warning(&format!(
            "{} of {} entry files missing",
            missing,
            config.targets.len()
        ));
    }
    FsValidator::new(&root).validate(&config)?;

    ui::success("All checks passed!");
    Ok(())
}
