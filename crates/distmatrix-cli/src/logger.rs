//! Logging infrastructure for the distmatrix CLI.
//!
//! Sets up `tracing-subscriber` with an [`EnvFilter`] chosen from the
//! verbosity flags, falling back to `RUST_LOG`.
//!
//! # Example
//!
//! ```rust,no_run
//! use distmatrix_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Planning build");
//! debug!("Loaded config from {}", "distmatrix.toml");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "distmatrix=debug,distmatrix_cli=debug";
const QUIET_FILTER: &str = "distmatrix=error,distmatrix_cli=error";
const DEFAULT_FILTER: &str = "distmatrix=info,distmatrix_cli=info";

/// Pick the log filter for the given flags.
///
/// The level is determined in this order:
/// 1. `--verbose`: DEBUG for distmatrix crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG` environment variable
/// 4. Default: INFO for distmatrix crates
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber.
///
/// Call once at the start of the program, before any logging occurs. Logs
/// go to stderr so that `plan --json` output on stdout stays parseable.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(build_filter(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
