//! AppStream metadata inspection for appstream-lint.
//!
//! This crate answers questions about AppStream catalogs (developer name,
//! license, component type, untranslated name and summary, screenshot
//! captions), runs the external `appstream-util` validator, and combines
//! both into a lint report.

pub mod accessors;
pub mod document;
pub mod error;
pub mod lint;
pub mod types;
pub mod validator;

pub use document::AppStreamDocument;
pub use error::MetadataError;
pub use lint::{AppStreamLinter, LintIssue, LintReport, Severity};
pub use types::{Component, LocalizedText, Screenshot, CONSOLE_APPLICATION};
pub use validator::{validate, AppstreamUtil, ValidationOutput, Validator};

/// Result type alias for metadata operations.
pub type Result<T> = std::result::Result<T, MetadataError>;
