//! Checks applied to a single AppStream catalog.

use std::path::Path;

use tracing::debug;

use appstream_lint_core::LintConfig;

use super::{LintIssue, LintReport};
use crate::document::AppStreamDocument;
use crate::validator::{AppstreamUtil, ValidationOutput, Validator};
use crate::Result;

/// Issue codes reported by [`AppStreamLinter`].
pub mod codes {
    pub const FAILED_VALIDATION: &str = "appstream-failed-validation";
    pub const VALIDATION_OUTPUT: &str = "appstream-validation-output";
    pub const NO_COMPONENTS: &str = "appstream-no-components";
    pub const MISSING_DEVELOPER_NAME: &str = "appstream-missing-developer-name";
    pub const MISSING_PROJECT_LICENSE: &str = "appstream-missing-project-license";
    pub const MISSING_NAME: &str = "appstream-missing-name";
    pub const MISSING_SUMMARY: &str = "appstream-missing-summary";
    pub const NAME_TOO_LONG: &str = "appstream-name-too-long";
    pub const SUMMARY_TOO_LONG: &str = "appstream-summary-too-long";
    pub const MISSING_SCREENSHOTS: &str = "appstream-missing-screenshots";
    pub const SCREENSHOT_MISSING_CAPTION: &str = "appstream-screenshot-missing-caption";
}

/// Runs the external validator and the metadata checks over one file.
#[derive(Debug, Clone)]
pub struct AppStreamLinter<V = AppstreamUtil> {
    validator: Option<V>,
    config: LintConfig,
}

impl AppStreamLinter<AppstreamUtil> {
    /// Creates a linter that runs the configured validator command.
    pub fn from_config(config: &LintConfig) -> Self {
        Self::with_validator(config, AppstreamUtil::from_config(&config.validator))
    }
}

impl<V: Validator> AppStreamLinter<V> {
    /// Creates a linter around a custom validator.
    ///
    /// The validator is still skipped when `validator.enabled` is false.
    pub fn with_validator(config: &LintConfig, validator: V) -> Self {
        Self {
            validator: config.validator.enabled.then_some(validator),
            config: config.clone(),
        }
    }

    /// Disables the external validator.
    pub fn without_validation(mut self) -> Self {
        self.validator = None;
        self
    }

    /// Returns `true` if the external validator will run.
    pub fn validates(&self) -> bool {
        self.validator.is_some()
    }

    /// Lints the file at `path`.
    ///
    /// # Errors
    ///
    /// Missing or malformed files and validator failures are returned as
    /// errors, not as issues.
    pub fn lint(&self, path: impl AsRef<Path>) -> Result<LintReport> {
        let path = path.as_ref();
        debug!(path = %path.display(), "linting AppStream file");

        let mut report = LintReport::new();

        if let Some(validator) = &self.validator {
            if !self.config.is_excepted(codes::FAILED_VALIDATION) {
                let output = validator.validate(path)?;
                check_validation(&output, &mut report);
            }
        }

        let document = AppStreamDocument::parse(path)?;
        self.check_document(&document, &mut report);

        report.retain_unexcepted(|code| self.config.is_excepted(code));
        debug!(
            path = %path.display(),
            errors = report.error_count(),
            warnings = report.warning_count(),
            "lint finished"
        );
        Ok(report)
    }

    /// Runs the metadata checks on an already parsed document.
    pub fn lint_document(&self, document: &AppStreamDocument) -> LintReport {
        let mut report = LintReport::new();
        self.check_document(document, &mut report);
        report.retain_unexcepted(|code| self.config.is_excepted(code));
        report
    }

    fn check_document(&self, document: &AppStreamDocument, report: &mut LintReport) {
        let Ok(component) = document.first_component() else {
            report.add(LintIssue::error(
                codes::NO_COMPONENTS,
                "Catalog contains no component",
            ));
            return;
        };

        if !component.has_developer_name() {
            report.add(LintIssue::error(
                codes::MISSING_DEVELOPER_NAME,
                "Component has no developer_name",
            ));
        }

        if !component.has_project_license() {
            report.add(LintIssue::error(
                codes::MISSING_PROJECT_LICENSE,
                "Component has no project_license",
            ));
        }

        check_text(
            report,
            document.untranslated_name(),
            "name",
            self.config.checks.name_max_chars,
            [codes::MISSING_NAME, codes::NAME_TOO_LONG],
        );
        check_text(
            report,
            document.untranslated_summary(),
            "summary",
            self.config.checks.summary_max_chars,
            [codes::MISSING_SUMMARY, codes::SUMMARY_TOO_LONG],
        );

        if !component.is_console_application() && document.screenshots().is_empty() {
            report.add(LintIssue::warning(
                codes::MISSING_SCREENSHOTS,
                "Graphical applications should provide screenshots",
            ));
        }

        if !document.all_screenshots_have_captions() {
            report.add(LintIssue::warning(
                codes::SCREENSHOT_MISSING_CAPTION,
                "Every screenshot should have a caption",
            ));
        }
    }
}

fn check_validation(output: &ValidationOutput, report: &mut LintReport) {
    if output.success() {
        return;
    }

    report.add(LintIssue::error(
        codes::FAILED_VALIDATION,
        format!("Validator exited with status {}", output.returncode),
    ));

    for line in output.stdout.lines().chain(output.stderr.lines()) {
        let line = line.trim();
        if !line.is_empty() {
            report.add(LintIssue::info(codes::VALIDATION_OUTPUT, line));
        }
    }
}

fn check_text(
    report: &mut LintReport,
    value: Option<&str>,
    field: &str,
    max_chars: usize,
    [missing_code, too_long_code]: [&str; 2],
) {
    match value {
        None => report.add(LintIssue::error(
            missing_code,
            format!("No untranslated {}", field),
        )),
        Some(text) => {
            let count = text.chars().count();
            if count > max_chars {
                report.add(LintIssue::warning(
                    too_long_code,
                    format!(
                        "Untranslated {} is {} characters, limit is {}",
                        field, count, max_chars
                    ),
                ));
            }
        }
    }
}
