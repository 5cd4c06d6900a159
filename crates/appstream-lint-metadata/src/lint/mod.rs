//! Lint pass over AppStream metadata.
//!
//! This module turns accessor answers and validator output into coded issues.
//!
//! ## Example
//!
//! ```rust,no_run
//! use appstream_lint_core::LintConfig;
//! use appstream_lint_metadata::lint::AppStreamLinter;
//!
//! let linter = AppStreamLinter::from_config(&LintConfig::default());
//! let report = linter.lint("org.example.App.xml").unwrap();
//!
//! for issue in report.errors() {
//!     eprintln!("{}: {}", issue.code, issue.message);
//! }
//! ```

mod appstream;

pub use appstream::{codes, AppStreamLinter};

use serde::Serialize;

/// Lint issue severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must be fixed.
    Error,
    /// Should be fixed; fatal only in strict mode.
    Warning,
    /// Context attached to another issue.
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Info => write!(f, "INFO"),
        }
    }
}

/// A single issue found while linting a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintIssue {
    /// Severity level of the issue.
    pub severity: Severity,
    /// Stable issue code (e.g. `appstream-missing-developer-name`).
    pub code: String,
    /// Human-readable description of the issue.
    pub message: String,
}

impl LintIssue {
    pub fn new(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    pub fn info(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, code, message)
    }
}

impl std::fmt::Display for LintIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.code, self.message)
    }
}

/// All issues found in one file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LintReport {
    /// All lint issues found.
    pub issues: Vec<LintIssue>,
}

impl LintReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Returns `true` if the file passed.
    ///
    /// In strict mode warnings fail the file as well.
    pub fn is_valid(&self, strict: bool) -> bool {
        !self
            .issues
            .iter()
            .any(|i| i.severity == Severity::Error || (strict && i.severity == Severity::Warning))
    }

    /// Returns `true` if there are no issues at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn errors(&self) -> Vec<&LintIssue> {
        self.by_severity(Severity::Error).collect()
    }

    pub fn infos(&self) -> Vec<&LintIssue> {
        self.by_severity(Severity::Info).collect()
    }

    pub fn error_count(&self) -> usize {
        self.by_severity(Severity::Error).count()
    }

    pub fn warning_count(&self) -> usize {
        self.by_severity(Severity::Warning).count()
    }

    /// Returns `true` if an issue with `code` was reported.
    pub fn contains(&self, code: &str) -> bool {
        self.issues.iter().any(|i| i.code == code)
    }

    /// Adds an issue to the report.
    pub fn add(&mut self, issue: LintIssue) {
        self.issues.push(issue);
    }

    /// Drops every issue whose code matches `excepted`.
    pub fn retain_unexcepted(&mut self, excepted: impl Fn(&str) -> bool) {
        self.issues.retain(|i| !excepted(&i.code));
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &LintIssue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }
}

impl<'a> IntoIterator for &'a LintReport {
    type Item = &'a LintIssue;
    type IntoIter = std::slice::Iter<'a, LintIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_is_valid() {
        let mut report = LintReport::new();
        assert!(report.is_valid(false));
        assert!(report.is_clean());

        report.add(LintIssue::warning("w", "warning"));
        assert!(report.is_valid(false));
        assert!(!report.is_valid(true));
        assert!(!report.is_clean());

        report.add(LintIssue::error("e", "error"));
        assert!(!report.is_valid(false));
    }

    #[test]
    fn test_info_never_fails() {
        let mut report = LintReport::new();
        report.add(LintIssue::info("i", "context"));
        assert!(report.is_valid(true));
    }

    #[test]
    fn test_report_counts() {
        let mut report = LintReport::new();
        report.add(LintIssue::error("e1", "first"));
        report.add(LintIssue::error("e2", "second"));
        report.add(LintIssue::warning("w1", "third"));
        report.add(LintIssue::info("i1", "fourth"));

        assert_eq!(report.error_count(), 2);
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.errors().len(), 2);
        assert_eq!(report.infos().len(), 1);
        assert!(report.contains("w1"));
    }

    #[test]
    fn test_retain_unexcepted() {
        let mut report = LintReport::new();
        report.add(LintIssue::error("keep", "k"));
        report.add(LintIssue::error("drop", "d"));

        report.retain_unexcepted(|code| code == "drop");
        assert!(report.contains("keep"));
        assert!(!report.contains("drop"));
    }

    #[test]
    fn test_issue_display() {
        let issue = LintIssue::error("appstream-missing-project-license", "no license");
        assert_eq!(
            issue.to_string(),
            "[ERROR] appstream-missing-project-license: no license"
        );
    }
}
