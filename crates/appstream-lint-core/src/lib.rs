//! appstream-lint core - configuration and shared error handling
//!
//! This crate holds the pieces every other appstream-lint crate leans on:
//! the lint configuration file and the errors produced while loading it.

pub mod config;
pub mod error;

pub use config::{ChecksConfig, LintConfig, ValidatorConfig};
pub use error::{ConfigError, Result};
