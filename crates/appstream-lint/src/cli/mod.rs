//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use appstream_lint_core::config::{load_config, load_config_or_default};
use appstream_lint_core::{ConfigError, LintConfig};

use crate::exit_codes;

use commands::{CheckCommand, InitCommand, InspectCommand, ValidateCommand};

/// appstream-lint - Lint AppStream metadata
#[derive(Debug, Parser)]
#[command(name = "appstream-lint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Configuration file (searched for upwards when omitted)
    #[arg(long, global = true, env = "APPSTREAM_LINT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lint AppStream files
    Check(CheckCommand),

    /// Run the external validator and pass its output through
    Validate(ValidateCommand),

    /// Show the metadata fields of an AppStream file
    Inspect(InspectCommand),

    /// Write a default configuration file
    Init(InitCommand),
}

impl Cli {
    /// Execute the CLI command, returning the process exit code
    pub fn execute(self) -> anyhow::Result<u8> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Check(ref cmd) => cmd.execute(&self),
            Commands::Validate(ref cmd) => cmd.execute(&self),
            Commands::Inspect(ref cmd) => cmd.execute(&self),
            Commands::Init(ref cmd) => cmd.execute(&self),
        }
    }

    /// Load the explicit config file, or search from the working directory.
    ///
    /// Failures keep their [`ConfigError`] so [`failure_code`] can map them.
    pub fn load_config(&self) -> anyhow::Result<LintConfig> {
        let config = match &self.config {
            Some(path) => load_config(path)?,
            None => load_config_or_default(&std::env::current_dir()?)?.0,
        };
        Ok(config)
    }
}

/// Exit code for a command that failed with `error`
pub fn failure_code(error: &anyhow::Error) -> u8 {
    if error.downcast_ref::<ConfigError>().is_some() {
        exit_codes::CONFIG_ERROR
    } else {
        exit_codes::ERROR
    }
}
