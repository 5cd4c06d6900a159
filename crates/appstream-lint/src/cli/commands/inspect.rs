//! Inspect command - show what the checks see in an AppStream file

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::info;

use appstream_lint_metadata::{AppStreamDocument, Screenshot};

use crate::cli::{output, Cli, OutputFormat};
use crate::exit_codes;

/// Show the metadata fields of an AppStream file
#[derive(Debug, Args)]
pub struct InspectCommand {
    /// AppStream file to inspect
    pub path: PathBuf,
}

/// Accessor answers for one document
#[derive(Debug, Serialize)]
struct Inspection<'a> {
    components: usize,
    id: Option<&'a str>,
    component_type: Option<&'a str>,
    is_console_application: bool,
    has_developer_name: bool,
    has_project_license: bool,
    untranslated_name: Option<&'a str>,
    untranslated_summary: Option<&'a str>,
    screenshots: &'a [Screenshot],
    all_screenshots_have_captions: bool,
}

impl<'a> Inspection<'a> {
    fn of(document: &'a AppStreamDocument) -> Self {
        let component = document.first_component().ok();

        Self {
            components: document.components().len(),
            id: component.and_then(|c| c.id.as_deref()),
            component_type: component.and_then(|c| c.kind.as_deref()),
            is_console_application: component.is_some_and(|c| c.is_console_application()),
            has_developer_name: component.is_some_and(|c| c.has_developer_name()),
            has_project_license: component.is_some_and(|c| c.has_project_license()),
            untranslated_name: document.untranslated_name(),
            untranslated_summary: document.untranslated_summary(),
            screenshots: document.screenshots(),
            all_screenshots_have_captions: document.all_screenshots_have_captions(),
        }
    }
}

impl InspectCommand {
    /// Execute the inspect command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<u8> {
        info!(path = %self.path.display(), "executing inspect command");

        let document = AppStreamDocument::parse(&self.path)?;
        let inspection = Inspection::of(&document);

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&inspection)?);
            }
            OutputFormat::Text => {
                if inspection.components == 0 {
                    output::warning("No component found; component fields are unavailable");
                }

                println!(
                    "{}",
                    output::header(&format!(
                        "{}",
                        output::path_style().apply_to(self.path.display())
                    ))
                );
                let lines = [
                    ("components", inspection.components.to_string()),
                    ("id", optional(inspection.id)),
                    ("type", optional(inspection.component_type)),
                    ("console application", yes_no(inspection.is_console_application)),
                    ("developer name", yes_no(inspection.has_developer_name)),
                    ("project license", yes_no(inspection.has_project_license)),
                    ("name", optional(inspection.untranslated_name)),
                    ("summary", optional(inspection.untranslated_summary)),
                    ("screenshots", inspection.screenshots.len().to_string()),
                    (
                        "captions complete",
                        yes_no(inspection.all_screenshots_have_captions),
                    ),
                ];
                for (key, value) in lines {
                    println!("{}", output::key_value(key, &value));
                }
                for (index, screenshot) in inspection.screenshots.iter().enumerate() {
                    let key = format!("screenshot {}", index + 1);
                    println!("{}", output::key_value(&key, &describe(screenshot)));
                }
            }
        }

        Ok(exit_codes::SUCCESS)
    }
}

/// One-line summary of a screenshot's type and captions
fn describe(screenshot: &Screenshot) -> String {
    let kind = screenshot.kind.as_deref().unwrap_or("(untyped)");
    let caption = screenshot
        .captions
        .iter()
        .find(|c| c.is_untranslated())
        .or_else(|| screenshot.captions.first());

    match caption {
        Some(caption) if screenshot.captioned => format!("{}, {:?}", kind, caption.text),
        _ => format!("{}, no caption", kind),
    }
}

fn optional(value: Option<&str>) -> String {
    value.map_or_else(|| "(none)".to_string(), |v| format!("{:?}", v))
}

fn yes_no(value: bool) -> String {
    let answer = if value { "yes" } else { "no" };
    answer.to_string()
}
