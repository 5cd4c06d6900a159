//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "appstream-lint.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "appstream-lint.yaml";

/// Validator used when none is configured
pub const DEFAULT_VALIDATOR_PROGRAM: &str = "appstream-util";

/// Offline validation, the file path is appended after these
pub const DEFAULT_VALIDATOR_ARGS: &[&str] = &["validate", "--nonet"];

/// Longest untranslated name accepted without a warning
pub const DEFAULT_NAME_MAX_CHARS: usize = 20;

/// Longest untranslated summary accepted without a warning
pub const DEFAULT_SUMMARY_MAX_CHARS: usize = 35;

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".appstream-lint.toml",
        ".appstream-lint.yaml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# appstream-lint configuration

validator:
  enabled: true
  program: appstream-util
  args: [validate, --nonet]

checks:
  name_max_chars: 20
  summary_max_chars: 35

exceptions: []
strict: false
"#;
