//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::LintConfig;

/// Validate configuration
pub fn validate_config(config: &LintConfig) -> Result<()> {
    debug!("validating configuration");
    validate_validator(config)?;
    validate_checks(config)?;
    validate_exceptions(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_validator(config: &LintConfig) -> Result<()> {
    if config.validator.program.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "validator.program".to_string(),
            message: "program cannot be empty".to_string(),
        });
    }

    Ok(())
}

fn validate_checks(config: &LintConfig) -> Result<()> {
    if config.checks.name_max_chars == 0 {
        return Err(ConfigError::InvalidValue {
            field: "checks.name_max_chars".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if config.checks.summary_max_chars == 0 {
        return Err(ConfigError::InvalidValue {
            field: "checks.summary_max_chars".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    Ok(())
}

fn validate_exceptions(config: &LintConfig) -> Result<()> {
    for (i, code) in config.exceptions.iter().enumerate() {
        if code.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("exceptions[{}]", i),
                message: "exception code cannot be empty".to_string(),
            });
        }
    }

    Ok(())
}
