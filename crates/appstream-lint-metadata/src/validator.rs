//! External AppStream validator invocation.
//!
//! The validator is run to completion and its output handed back untouched.
//! Deciding what a non-zero exit code or a particular message means is left
//! to the caller.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use serde::Serialize;
use tracing::debug;

use appstream_lint_core::ValidatorConfig;

use crate::error::MetadataError;
use crate::Result;

/// Captured output of one validator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutput {
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Exit code; a process killed by a signal reports the negated signal
    pub returncode: i32,
}

impl ValidationOutput {
    /// Returns `true` if the validator exited with status 0.
    pub fn success(&self) -> bool {
        self.returncode == 0
    }
}

/// Something that can validate an AppStream file.
pub trait Validator {
    /// Validates the file at `path`.
    fn validate(&self, path: &Path) -> Result<ValidationOutput>;
}

impl<F> Validator for F
where
    F: Fn(&Path) -> Result<ValidationOutput>,
{
    fn validate(&self, path: &Path) -> Result<ValidationOutput> {
        self(path)
    }
}

/// Runs `appstream-util validate --nonet <path>`, or a configured equivalent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppstreamUtil {
    program: String,
    args: Vec<String>,
}

impl Default for AppstreamUtil {
    fn default() -> Self {
        Self::from_config(&ValidatorConfig::default())
    }
}

impl AppstreamUtil {
    /// Creates a validator using the default command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator from configuration.
    pub fn from_config(config: &ValidatorConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
        }
    }

    /// Replaces the program.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Replaces the arguments placed before the file path.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Program name as configured.
    pub fn program(&self) -> &str {
        &self.program
    }

    fn resolve_program(&self) -> Result<PathBuf> {
        which::which(&self.program).map_err(|source| MetadataError::ValidatorUnavailable {
            program: self.program.clone(),
            source,
        })
    }
}

impl Validator for AppstreamUtil {
    fn validate(&self, path: &Path) -> Result<ValidationOutput> {
        if !path.is_file() {
            return Err(MetadataError::NotFound(path.to_path_buf()));
        }

        let program = self.resolve_program()?;
        debug!(
            program = %program.display(),
            args = ?self.args,
            path = %path.display(),
            "running AppStream validator"
        );

        let output = Command::new(&program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| MetadataError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8(output.stdout).map_err(|source| MetadataError::Decode {
            stream: "stdout",
            source,
        })?;
        let stderr = String::from_utf8(output.stderr).map_err(|source| MetadataError::Decode {
            stream: "stderr",
            source,
        })?;
        let returncode = exit_code(output.status);

        debug!(returncode, "validator finished");

        Ok(ValidationOutput {
            stdout,
            stderr,
            returncode,
        })
    }
}

/// Validates `path` with the default `appstream-util` command.
pub fn validate(path: impl AsRef<Path>) -> Result<ValidationOutput> {
    AppstreamUtil::default().validate(path.as_ref())
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| -signal))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn metadata_file(temp: &TempDir) -> PathBuf {
        let path = temp.path().join("org.example.App.xml");
        std::fs::write(&path, "<components/>").unwrap();
        path
    }

    #[test]
    fn test_missing_file_checked_before_program() {
        let temp = TempDir::new().unwrap();
        let validator = AppstreamUtil::new().with_program("appstream-lint-no-such-validator");

        let err = validator
            .validate(&temp.path().join("missing.xml"))
            .unwrap_err();
        assert!(matches!(err, MetadataError::NotFound(_)));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let temp = TempDir::new().unwrap();
        let err = validate(temp.path()).unwrap_err();
        assert!(matches!(err, MetadataError::NotFound(_)));
    }

    #[test]
    fn test_unavailable_program() {
        let temp = TempDir::new().unwrap();
        let path = metadata_file(&temp);
        let validator = AppstreamUtil::new().with_program("appstream-lint-no-such-validator");

        let err = validator.validate(&path).unwrap_err();
        assert!(matches!(err, MetadataError::ValidatorUnavailable { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_success_output_captured() {
        let temp = TempDir::new().unwrap();
        let path = metadata_file(&temp);
        let validator = AppstreamUtil::new()
            .with_program("sh")
            .with_args(["-c", "echo \"checked $1\"", "sh"]);

        let output = validator.validate(&path).unwrap();
        assert!(output.success());
        assert_eq!(output.returncode, 0);
        assert_eq!(output.stdout.trim(), format!("checked {}", path.display()));
        assert!(output.stderr.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_passed_through() {
        let temp = TempDir::new().unwrap();
        let path = metadata_file(&temp);
        let validator = AppstreamUtil::new()
            .with_program("sh")
            .with_args(["-c", "echo 'tag-invalid: bad' >&2; exit 3", "sh"]);

        let output = validator.validate(&path).unwrap();
        assert!(!output.success());
        assert_eq!(output.returncode, 3);
        assert!(output.stderr.contains("tag-invalid"));
    }

    #[cfg(unix)]
    #[test]
    fn test_invalid_utf8_output() {
        let temp = TempDir::new().unwrap();
        let path = metadata_file(&temp);
        let validator = AppstreamUtil::new()
            .with_program("sh")
            .with_args(["-c", "printf '\\377\\376'", "sh"]);

        let err = validator.validate(&path).unwrap_err();
        assert!(matches!(err, MetadataError::Decode { stream: "stdout", .. }));
    }

    #[test]
    fn test_closure_validator() {
        let fake = |_: &Path| -> Result<ValidationOutput> {
            Ok(ValidationOutput {
                stdout: "OK".to_string(),
                stderr: String::new(),
                returncode: 0,
            })
        };
        let output = fake.validate(Path::new("anything.xml")).unwrap();
        assert_eq!(output.stdout, "OK");
    }

    #[test]
    fn test_validation_output_serializes_fields() {
        let output = ValidationOutput {
            stdout: "out".to_string(),
            stderr: "err".to_string(),
            returncode: 1,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["stdout"], "out");
        assert_eq!(json["stderr"], "err");
        assert_eq!(json["returncode"], 1);
    }
}
