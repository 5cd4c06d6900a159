//! Configuration types

use serde::{Deserialize, Serialize};

use super::defaults::{
    DEFAULT_NAME_MAX_CHARS, DEFAULT_SUMMARY_MAX_CHARS, DEFAULT_VALIDATOR_ARGS,
    DEFAULT_VALIDATOR_PROGRAM,
};

/// Main configuration for appstream-lint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// External validator configuration
    pub validator: ValidatorConfig,

    /// Thresholds for the built-in metadata checks
    pub checks: ChecksConfig,

    /// Issue codes that are never reported
    pub exceptions: Vec<String>,

    /// Treat warnings as errors
    pub strict: bool,
}

impl LintConfig {
    /// Returns `true` if the given issue code has been excepted
    pub fn is_excepted(&self, code: &str) -> bool {
        self.exceptions.iter().any(|e| e == code)
    }
}

/// External validator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Whether the external validator runs at all
    pub enabled: bool,

    /// Program to run, resolved on `PATH`
    pub program: String,

    /// Arguments placed before the file path
    pub args: Vec<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: DEFAULT_VALIDATOR_PROGRAM.to_string(),
            args: DEFAULT_VALIDATOR_ARGS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Thresholds for the built-in metadata checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksConfig {
    /// Maximum characters in the untranslated name
    pub name_max_chars: usize,

    /// Maximum characters in the untranslated summary
    pub summary_max_chars: usize,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            name_max_chars: DEFAULT_NAME_MAX_CHARS,
            summary_max_chars: DEFAULT_SUMMARY_MAX_CHARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validator_command() {
        let config = LintConfig::default();
        assert!(config.validator.enabled);
        assert_eq!(config.validator.program, "appstream-util");
        assert_eq!(config.validator.args, vec!["validate", "--nonet"]);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: LintConfig = serde_yaml::from_str("checks:\n  name_max_chars: 30\n").unwrap();
        assert_eq!(config.checks.name_max_chars, 30);
        assert_eq!(config.checks.summary_max_chars, 35);
        assert_eq!(config.validator, ValidatorConfig::default());
    }

    #[test]
    fn test_is_excepted() {
        let config = LintConfig {
            exceptions: vec!["appstream-missing-screenshots".to_string()],
            ..Default::default()
        };
        assert!(config.is_excepted("appstream-missing-screenshots"));
        assert!(!config.is_excepted("appstream-failed-validation"));
    }
}
