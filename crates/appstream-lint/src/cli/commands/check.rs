//! Check command - lint AppStream files

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use tracing::{info, warn};
use walkdir::WalkDir;

use appstream_lint_core::LintConfig;
use appstream_lint_metadata::{AppStreamLinter, LintReport};

use crate::cli::{output, Cli, OutputFormat};
use crate::exit_codes;

/// Lint AppStream files
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// AppStream files, or directories searched for `*.xml`
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Strict mode - treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Skip the external validator
    #[arg(long)]
    pub no_validate: bool,

    /// Issue code to ignore (repeatable)
    #[arg(long = "exception", value_name = "CODE")]
    pub exceptions: Vec<String>,
}

/// Outcome for a single file
#[derive(Debug, Serialize)]
struct FileResult {
    path: PathBuf,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<LintReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<u8> {
        info!(
            paths = self.paths.len(),
            strict = self.strict,
            no_validate = self.no_validate,
            "executing check command"
        );

        let config = self.apply_overrides(cli.load_config()?);
        let linter = AppStreamLinter::from_config(&config);

        let files = collect_files(&self.paths)?;
        if files.is_empty() {
            anyhow::bail!("No AppStream files found");
        }

        let results: Vec<FileResult> = files
            .into_iter()
            .map(|path| match linter.lint(&path) {
                Ok(report) => FileResult {
                    valid: report.is_valid(config.strict),
                    path,
                    report: Some(report),
                    error: None,
                },
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to lint file");
                    FileResult {
                        path,
                        valid: false,
                        report: None,
                        error: Some(e.to_string()),
                    }
                }
            })
            .collect();

        let failed = results.iter().filter(|r| !r.valid).count();

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "valid": failed == 0,
                    "files": results,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    print_text(&results, failed);
                }
            }
        }

        Ok(exit_code(&results))
    }

    fn apply_overrides(&self, mut config: LintConfig) -> LintConfig {
        config.strict |= self.strict;
        if self.no_validate {
            config.validator.enabled = false;
        }
        for code in &self.exceptions {
            if !config.is_excepted(code) {
                config.exceptions.push(code.clone());
            }
        }
        config
    }
}

fn print_text(results: &[FileResult], failed: usize) {
    for result in results {
        let path = output::path_style().apply_to(result.path.display());
        match (&result.report, &result.error) {
            (_, Some(error)) => output::error(&format!("{}: {}", path, error)),
            (Some(report), None) => {
                if report.is_clean() {
                    output::success(&path.to_string());
                } else if result.valid {
                    output::warning(&path.to_string());
                } else {
                    output::error(&path.to_string());
                }
                for issue in report {
                    output::issue(issue);
                }
            }
            (None, None) => {}
        }
    }

    println!();
    if failed == 0 {
        output::success(&format!("{} file(s) passed", results.len()));
    } else {
        output::error(&format!("{} of {} file(s) failed", failed, results.len()));
    }
}

/// Files that could not be linted outrank files that failed lint.
fn exit_code(results: &[FileResult]) -> u8 {
    if results.iter().any(|r| r.error.is_some()) {
        exit_codes::ERROR
    } else if results.iter().any(|r| !r.valid) {
        exit_codes::LINT_FAILED
    } else {
        exit_codes::SUCCESS
    }
}

/// Expand directories into the `*.xml` files below them, sorted by path.
fn collect_files(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            for entry in WalkDir::new(path).follow_links(true) {
                let entry = entry?;
                if entry.file_type().is_file() && is_xml(entry.path()) {
                    found.push(entry.into_path());
                }
            }
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }

    Ok(files)
}

fn is_xml(path: &Path) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case("xml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_files_walks_directories() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("share").join("app-info").join("xmls");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("b.xml"), "<components/>").unwrap();
        std::fs::write(nested.join("a.xml"), "<components/>").unwrap();
        std::fs::write(nested.join("icon.png"), "").unwrap();

        let files = collect_files(&[temp.path().to_path_buf()]).unwrap();
        assert_eq!(files, vec![nested.join("a.xml"), nested.join("b.xml")]);
    }

    #[test]
    fn test_collect_files_keeps_explicit_files() {
        let files = collect_files(&[PathBuf::from("missing.metainfo")]).unwrap();
        assert_eq!(files, vec![PathBuf::from("missing.metainfo")]);
    }

    fn result(valid: bool, error: Option<&str>) -> FileResult {
        FileResult {
            path: PathBuf::from("a.xml"),
            valid,
            report: None,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(exit_code(&[result(true, None)]), exit_codes::SUCCESS);
        assert_eq!(
            exit_code(&[result(true, None), result(false, None)]),
            exit_codes::LINT_FAILED
        );
        assert_eq!(
            exit_code(&[result(false, None), result(false, Some("not found"))]),
            exit_codes::ERROR
        );
    }

    #[test]
    fn test_overrides_merge_into_config() {
        let cmd = CheckCommand {
            paths: vec![PathBuf::from("a.xml")],
            strict: true,
            no_validate: true,
            exceptions: vec!["appstream-missing-screenshots".to_string()],
        };

        let config = cmd.apply_overrides(LintConfig::default());
        assert!(config.strict);
        assert!(!config.validator.enabled);
        assert!(config.is_excepted("appstream-missing-screenshots"));
    }
}
