//! One-shot queries over an AppStream file.
//!
//! Each function parses `path` from scratch and drops the tree before
//! returning. Use [`AppStreamDocument`] directly to ask several questions of
//! the same file.

use std::path::Path;

use crate::document::AppStreamDocument;
use crate::types::Component;
use crate::Result;

/// Parses the file at `path`.
pub fn parse(path: impl AsRef<Path>) -> Result<AppStreamDocument> {
    AppStreamDocument::parse(path)
}

/// All `/components/component` records, in document order.
pub fn list_components(path: impl AsRef<Path>) -> Result<Vec<Component>> {
    Ok(parse(path)?.components().to_vec())
}

/// Whether the first component has a `developer_name` child.
pub fn has_developer_name(path: impl AsRef<Path>) -> Result<bool> {
    parse(path)?.has_developer_name()
}

/// Whether the first component has a `project_license` child.
pub fn has_project_license(path: impl AsRef<Path>) -> Result<bool> {
    parse(path)?.has_project_license()
}

/// The `type` attribute of the first component.
pub fn component_type(path: impl AsRef<Path>) -> Result<Option<String>> {
    Ok(parse(path)?.component_type()?.map(str::to_string))
}

/// Whether the first component is a `console-application`.
pub fn is_console_application(path: impl AsRef<Path>) -> Result<bool> {
    parse(path)?.is_console_application()
}

pub fn untranslated_name(path: impl AsRef<Path>) -> Result<Option<String>> {
    Ok(parse(path)?.untranslated_name().map(str::to_string))
}

pub fn untranslated_summary(path: impl AsRef<Path>) -> Result<Option<String>> {
    Ok(parse(path)?.untranslated_summary().map(str::to_string))
}

/// Whether every screenshot carries a caption with text.
pub fn all_screenshots_have_captions(path: impl AsRef<Path>) -> Result<bool> {
    Ok(parse(path)?.all_screenshots_have_captions())
}
