//! Schema command implementation.

use distmatrix::MatrixConfig;

use crate::error::{Result, ResultExt};

/// JSON schema describing `distmatrix.toml`.
pub fn config_schema() -> Result<serde_json::Value> {
    let schema = schemars::schema_for!(MatrixConfig);
    serde_json::to_value(schema).context("Failed to serialize the config schema")
}

/// Execute the schema command: print the schema to stdout.
pub fn execute() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&config_schema()?)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_describes_targets() {
        let schema = config_schema().unwrap();
        assert_eq!(schema["title"], "MatrixConfig");
        assert!(schema["properties"]["targets"].is_object());
        assert!(schema["properties"]["globals"].is_object());
    }
}
