//! Terminal UI utilities for status messages and the plan table.
//!
//! Status messages go to stderr; plan output goes to stdout.
//!
//! # Examples
//!
//! ```no_run
//! use distmatrix_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("Checking configuration...");
//! ui::success("Configuration is valid");
//! ```

mod format;
mod messages;

pub use format::{format_job_row, format_stages, print_plan, print_plan_summary};
pub use messages::{error, info, success, warning};

/// Initialize color support based on flags and environment.
///
/// `--no-color` and `NO_COLOR` disable colors, `FORCE_COLOR` forces them;
/// otherwise each stream is checked for terminal support when printed.
/// Should be called early, e.g. in `main`.
pub fn init_colors(no_color: bool) {
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        owo_colors::set_override(false);
    } else if std::env::var_os("FORCE_COLOR").is_some() {
        owo_colors::set_override(true);
    }
}
