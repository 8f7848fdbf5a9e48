//! Command implementations for the distmatrix CLI.
//!
//! - [`plan`] - Print the build jobs
//! - [`check`] - Validate configuration and entry files
//! - [`init`] - Write the reference configuration
//! - [`schema`] - Print the config JSON schema
//! - [`external`] - Explain externalization of one module id

pub mod check;
pub mod external;
pub mod init;
pub mod plan;
pub mod schema;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use external::execute as external_execute;
pub use init::execute as init_execute;
pub use plan::execute as plan_execute;
pub use schema::execute as schema_execute;
