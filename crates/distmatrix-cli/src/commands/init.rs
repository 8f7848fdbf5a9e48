//! Init command implementation.
//!
//! Writes the reference configuration as a starting point.

use distmatrix::{MatrixConfig, CONFIG_FILE_NAME};
use std::fs;

use crate::cli::InitArgs;
use crate::commands::utils;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

/// Execute the init command.
///
/// # Errors
///
/// Returns `FileExists` when `distmatrix.toml` is already present and
/// `--force` was not given.
pub fn execute(args: InitArgs) -> Result<()> {
    let cwd = utils::get_cwd()?;
    let dir = match &args.dir {
        Some(dir) => utils::resolve_path(dir, &cwd),
        None => cwd,
    };
    let path = dir.join(CONFIG_FILE_NAME);

    if path.exists() && !args.force {
        return Err(CliError::FileExists(path));
    }

    let content = render_reference().context("Failed to render the reference configuration")?;
    fs::write(&path, content)
        .with_path(&path)
        .with_hint("Check that the target directory exists and is writable")?;

    ui::success(&format!("Created {}", path.display()));
    ui::info("Run 'distmatrix check' once the entry files are in place");
    Ok(())
}

/// The reference configuration as TOML.
pub fn render_reference() -> Result<String> {
    Ok(toml::to_string_pretty(&MatrixConfig::reference())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reference_renders_every_target() {
        let rendered = render_reference().unwrap();
        assert_eq!(rendered.matches("[[targets]]").count(), 7);
        assert!(rendered.contains("global = \"ReactSpringAddons\""));
        assert!(rendered.contains("react-dom = \"ReactDOM\""));
    }

    #[test]
    fn test_missing_directory_reports_hint() {
        let dir = TempDir::new().unwrap();
        let args = InitArgs {
            force: false,
            dir: Some(dir.path().join("missing")),
        };

        let msg = execute(args).unwrap_err().to_string();
        assert!(msg.starts_with("File not found: "));
        assert!(msg.contains("Hint: Check that the target directory exists and is writable"));
    }

    #[test]
    fn test_existing_file_requires_force() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();
        let args = InitArgs {
            force: false,
            dir: Some(dir.path().to_path_buf()),
        };

        assert!(matches!(execute(args), Err(CliError::FileExists(_))));
    }
}
