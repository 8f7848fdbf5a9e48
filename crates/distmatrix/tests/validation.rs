//! Tests for configuration validation against the filesystem.

use distmatrix::{BuildTarget, ConfigError, ConfigValidator, FsValidator, MatrixConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_entry(root: &std::path::Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).expect("create entry dir");
    fs::write(path, "export default {};").expect("write entry");
}

#[test]
fn validate_catches_missing_entry() {
    let dir = TempDir::new().expect("tempdir");
    let mut config = MatrixConfig::default();
    config.targets.push(BuildTarget::new("targets/web/index", "hooks"));

    match FsValidator::new(dir.path()).validate(&config).unwrap_err() {
        ConfigError::EntryNotFound { path } => {
            assert!(path.ends_with("src/targets/web/index.js"));
        }
        other => panic!("expected EntryNotFound error, got {other:?}"),
    }
}

#[test]
fn validate_succeeds_when_entries_exist() {
    let dir = TempDir::new().expect("tempdir");
    write_entry(dir.path(), "src/targets/web/index.js");
    write_entry(dir.path(), "src/renderprops/addons/index.js");

    let mut config = MatrixConfig::default();
    config.targets = vec![
        BuildTarget::new("targets/web/index", "hooks"),
        BuildTarget::new("renderprops/addons/index", "renderprops-addons")
            .with_global("ReactSpringAddons"),
    ];

    assert!(FsValidator::new(dir.path()).validate(&config).is_ok());
}

#[test]
fn validate_honors_source_dir_and_extension() {
    let dir = TempDir::new().expect("tempdir");
    write_entry(dir.path(), "lib/index.mjs");

    let mut config = MatrixConfig::default();
    config.source_dir = PathBuf::from("lib");
    config.extension = "mjs".to_string();
    config.targets.push(BuildTarget::new("index", "core"));

    assert!(FsValidator::new(dir.path()).validate(&config).is_ok());
}

#[test]
fn schema_errors_win_over_filesystem_errors() {
    let dir = TempDir::new().expect("tempdir");
    let config = MatrixConfig::default();

    let err = FsValidator::new(dir.path()).validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::NoTargets));
}
