//! Configuration loading for CLI commands.
//!
//! Layout settings are merged from several sources.
//! Priority: CLI flags > environment (`DISTMATRIX_*`) > config file > defaults

use distmatrix::{load_file, ConfigDiscovery, ConfigError, MatrixConfig};
use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Environment variable prefix for layout overrides
pub const ENV_PREFIX: &str = "DISTMATRIX_";

/// Config-related global flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOptions {
    pub config: Option<PathBuf>,
    pub profile: Option<String>,
}

/// Directory layout fields that can be overridden outside the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Layout {
    source_dir: PathBuf,
    out_dir: PathBuf,
    extension: String,
}

/// Load the configuration for a command.
///
/// Reads `--config` if given, otherwise discovers a config file in `cwd`,
/// merges the selected profile, then applies environment and flag overrides.
pub fn load_config(
    options: &ConfigOptions,
    cwd: &Path,
    flags: &LayoutOverrides,
) -> Result<MatrixConfig> {
    let config = match &options.config {
        Some(path) => load_file(&cwd.join(path))?,
        None => ConfigDiscovery::new(cwd).load()?,
    };

    let config = config.materialize_profile(options.profile.as_deref())?;
    apply_overrides(config, Env::prefixed(ENV_PREFIX), flags)
}

fn apply_overrides(
    mut config: MatrixConfig,
    env: Env,
    flags: &LayoutOverrides,
) -> Result<MatrixConfig> {
    let base = Layout {
        source_dir: config.source_dir.clone(),
        out_dir: config.out_dir.clone(),
        extension: config.extension.clone(),
    };

    let layout: Layout = Figment::new()
        .merge(Serialized::defaults(base))
        .merge(env.only(&["source_dir", "out_dir", "extension"]))
        .merge(Serialized::defaults(flags))
        .extract()
        .map_err(|e| ConfigError::InvalidValue {
            field: "layout".to_string(),
            hint: Some(e.to_string()),
        })?;

    tracing::debug!(
        "Layout: source_dir={} out_dir={} extension={}",
        layout.source_dir.display(),
        layout.out_dir.display(),
        layout.extension
    );

    config.source_dir = layout.source_dir;
    config.out_dir = layout.out_dir;
    config.extension = layout.extension;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
out_dir = "dist"

[[targets]]
entry = "targets/web/index"
out = "hooks"

[profiles.release]
out_dir = "release"
"#;

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("distmatrix.toml"), CONFIG).unwrap();
        dir
    }

    #[test]
    #[serial]
    fn flags_override_file() {
        let dir = project();
        let flags = LayoutOverrides {
            out_dir: Some(PathBuf::from("build")),
            ..LayoutOverrides::default()
        };

        let config = load_config(&ConfigOptions::default(), dir.path(), &flags).unwrap();
        assert_eq!(config.out_dir, PathBuf::from("build"));
        assert_eq!(config.source_dir, PathBuf::from("src"));
    }

    #[test]
    #[serial]
    fn profile_applies_before_flags() {
        let dir = project();
        let options = ConfigOptions {
            config: None,
            profile: Some("release".to_string()),
        };

        let config = load_config(&options, dir.path(), &LayoutOverrides::default()).unwrap();
        assert_eq!(config.out_dir, PathBuf::from("release"));
    }

    #[test]
    #[serial]
    fn environment_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("DISTMATRIX_SOURCE_DIR", "lib");
            jail.set_env("DISTMATRIX_EXTENSION", "mjs");

            let config = apply_overrides(
                MatrixConfig::reference(),
                Env::prefixed(ENV_PREFIX),
                &LayoutOverrides::default(),
            )
            .map_err(|e| e.to_string())?;

            assert_eq!(config.source_dir, PathBuf::from("lib"));
            assert_eq!(config.extension, "mjs");
            assert_eq!(config.out_dir, PathBuf::from("dist"));
            Ok(())
        });
    }

    #[test]
    #[serial]
    fn explicit_config_path_is_resolved_against_cwd() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("configs")).unwrap();
        fs::write(dir.path().join("configs/dist.toml"), CONFIG).unwrap();

        let options = ConfigOptions {
            config: Some(PathBuf::from("configs/dist.toml")),
            profile: None,
        };
        let config = load_config(&options, dir.path(), &LayoutOverrides::default()).unwrap();
        assert_eq!(config.targets.len(), 1);
    }

    #[test]
    #[serial]
    fn missing_config_is_reported() {
        let dir = TempDir::new().unwrap();
        let err = load_config(&ConfigOptions::default(), dir.path(), &LayoutOverrides::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::NotFound)));
    }
}
