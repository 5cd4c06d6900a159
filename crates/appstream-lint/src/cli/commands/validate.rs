//! Validate command - run the external AppStream validator

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use appstream_lint_metadata::{AppstreamUtil, Validator};

use crate::cli::{Cli, OutputFormat};
use crate::exit_codes;

/// Run the external validator and pass its output through
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// AppStream file to validate
    pub path: PathBuf,

    /// Validator program (overrides the configuration)
    #[arg(long)]
    pub program: Option<String>,
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<u8> {
        let config = cli.load_config()?;

        let mut validator = AppstreamUtil::from_config(&config.validator);
        if let Some(program) = &self.program {
            validator = validator.with_program(program.clone());
        }
        info!(
            path = %self.path.display(),
            program = validator.program(),
            "executing validate command"
        );

        let output = validator.validate(&self.path)?;

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                std::io::stdout().write_all(output.stdout.as_bytes())?;
                std::io::stderr().write_all(output.stderr.as_bytes())?;
                std::io::stdout().flush()?;
            }
        }

        Ok(exit_status(output.returncode))
    }
}

/// Maps the validator's return code onto our own exit status.
///
/// A negative code is a signal number and becomes `128 + signal` as in a
/// shell. Codes that do not fit in a byte are reported as [`exit_codes::ERROR`].
fn exit_status(returncode: i32) -> u8 {
    let code = if returncode < 0 {
        i32::from(exit_codes::SIGNAL_BASE).saturating_sub(returncode)
    } else {
        returncode
    };
    u8::try_from(code).unwrap_or(exit_codes::ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_exit_status_passes_codes_through() {
        assert_eq!(exit_status(0), exit_codes::SUCCESS);
        assert_eq!(exit_status(3), 3);
        assert_eq!(exit_status(1000), exit_codes::ERROR);
    }

    #[test]
    fn test_exit_status_for_signals() {
        assert_eq!(exit_status(-9), 137);
        assert_eq!(exit_status(-15), 143);
    }

    #[test]
    fn test_validate_program_override() {
        let cli = Cli::try_parse_from([
            "appstream-lint",
            "validate",
            "--program",
            "appstreamcli",
            "app.xml",
        ])
        .unwrap();

        match cli.command {
            crate::cli::Commands::Validate(cmd) => {
                assert_eq!(cmd.program.as_deref(), Some("appstreamcli"));
                assert_eq!(cmd.path, PathBuf::from("app.xml"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
