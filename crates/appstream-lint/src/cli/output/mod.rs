//! Output formatting utilities

use console::{style, Style};

use appstream_lint_metadata::{LintIssue, Severity};

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    println!("{} {}", style("!").yellow().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", style("→").blue(), message);
}

/// Create a styled header
pub fn header(text: &str) -> String {
    style(text).bold().to_string()
}

/// Create a styled key-value line
pub fn key_value(key: &str, value: &str) -> String {
    format!("  {}: {}", style(key).dim(), value)
}

/// Style for paths
pub fn path_style() -> Style {
    Style::new().cyan()
}

/// Print one lint issue, indented under its file
pub fn issue(issue: &LintIssue) {
    match issue.severity {
        Severity::Error => println!(
            "  {} {} {}",
            style("✗").red(),
            style(&issue.code).red().bold(),
            issue.message
        ),
        Severity::Warning => println!(
            "  {} {} {}",
            style("!").yellow(),
            style(&issue.code).yellow().bold(),
            issue.message
        ),
        Severity::Info => println!("      {}", style(&issue.message).dim()),
    }
}
