//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::LintConfig;
use super::validation::validate_config;

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<LintConfig> {
    let format = if path.extension().is_some_and(|e| e == "toml") {
        "TOML"
    } else {
        "YAML"
    };
    info!(path = %path.display(), format, "loading config");

    let content = std::fs::read_to_string(path)?;

    let config: LintConfig = if format == "TOML" {
        toml::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    validate_config(&config)?;
    debug!(path = %path.display(), "config loaded and validated");
    Ok(config)
}

/// Find configuration file in directory or parent directories.
///
/// The first name from [`config_file_names`] present in a directory wins.
/// Parents are walked until the filesystem root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in config_file_names() {
            let config_path = current.join(name);
            if config_path.is_file() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load configuration from directory (searching parent directories)
pub fn load_config_from_dir(dir: &Path) -> Result<(LintConfig, PathBuf)> {
    let config_path = find_config(dir).ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))?;

    let config = load_config(&config_path)?;
    Ok((config, config_path))
}

/// Load configuration or use defaults.
///
/// A config file that exists but fails to load is still an error; only a
/// missing file falls back to defaults.
pub fn load_config_or_default(dir: &Path) -> Result<(LintConfig, Option<PathBuf>)> {
    match load_config_from_dir(dir) {
        Ok((config, path)) => Ok((config, Some(path))),
        Err(ConfigError::NotFound(_)) => {
            warn!(dir = %dir.display(), "no config found, using defaults");
            Ok((LintConfig::default(), None))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("appstream-lint.toml");
        std::fs::write(&config_path, "strict = true\n").unwrap();

        let found = find_config(temp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_prefers_toml_over_yaml() {
        let temp = TempDir::new().unwrap();
        let toml_path = temp.path().join("appstream-lint.toml");
        let yaml_path = temp.path().join("appstream-lint.yaml");
        std::fs::write(&toml_path, "strict = true\n").unwrap();
        std::fs::write(&yaml_path, "strict: false\n").unwrap();

        let found = find_config(temp.path()).unwrap();
        assert_eq!(found, toml_path);
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(".appstream-lint.yaml");
        std::fs::write(&config_path, "strict: true\n").unwrap();
        let nested = temp.path().join("share").join("metainfo");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_load_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("appstream-lint.toml");
        std::fs::write(
            &config_path,
            "exceptions = [\"appstream-missing-screenshots\"]\n\n[validator]\nprogram = \"appstreamcli\"\nargs = [\"validate\", \"--no-net\"]\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.validator.program, "appstreamcli");
        assert_eq!(config.validator.args, vec!["validate", "--no-net"]);
        assert!(config.is_excepted("appstream-missing-screenshots"));
    }

    #[test]
    fn test_load_config_yaml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("appstream-lint.yaml");
        std::fs::write(
            &config_path,
            "strict: true\nchecks:\n  summary_max_chars: 50\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert!(config.strict);
        assert_eq!(config.checks.summary_max_chars, 50);
        assert_eq!(config.checks.name_max_chars, 20);
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("appstream-lint.yaml");
        std::fs::write(&config_path, "validator:\n  program: \"\"\n").unwrap();

        let err = load_config(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_load_config_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let (config, path) = load_config_or_default(temp.path()).unwrap();
        assert!(path.is_none());
        assert_eq!(config, LintConfig::default());
    }
}
