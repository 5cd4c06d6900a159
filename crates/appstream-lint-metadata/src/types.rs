//! Owned AppStream element types.

use serde::Serialize;

/// Component type that marks a command line application.
pub const CONSOLE_APPLICATION: &str = "console-application";

/// A text element that may carry an `xml:lang` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    /// Value of `xml:lang`, `None` when absent or empty.
    pub lang: Option<String>,
    /// Leading text of the element, empty when it has none.
    pub text: String,
}

impl LocalizedText {
    /// Returns `true` if this is the default-locale value.
    pub fn is_untranslated(&self) -> bool {
        self.lang.is_none()
    }
}

/// A single `component` record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Component {
    /// The `type` attribute (e.g. `desktop-application`).
    pub kind: Option<String>,
    /// Text of the first `id` child.
    pub id: Option<String>,
    /// All `name` children in document order.
    pub names: Vec<LocalizedText>,
    /// All `summary` children in document order.
    pub summaries: Vec<LocalizedText>,
    /// All `developer_name` children in document order.
    pub developer_names: Vec<LocalizedText>,
    /// Text of the first `project_license` child.
    pub project_license: Option<String>,
}

impl Component {
    /// Returns `true` if the component declares a `developer_name`.
    pub fn has_developer_name(&self) -> bool {
        !self.developer_names.is_empty()
    }

    /// Returns `true` if the component declares a `project_license`.
    pub fn has_project_license(&self) -> bool {
        self.project_license.is_some()
    }

    /// Returns `true` for `type="console-application"`.
    pub fn is_console_application(&self) -> bool {
        self.kind.as_deref() == Some(CONSOLE_APPLICATION)
    }

    /// First `name` without a language tag.
    pub fn untranslated_name(&self) -> Option<&str> {
        first_untranslated(&self.names)
    }

    /// First `summary` without a language tag.
    pub fn untranslated_summary(&self) -> Option<&str> {
        first_untranslated(&self.summaries)
    }
}

/// A `screenshot` element and its captions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Screenshot {
    /// The `type` attribute (`default` or absent).
    pub kind: Option<String>,
    /// All `caption` children in document order.
    pub captions: Vec<LocalizedText>,
    /// Whether any `caption` child holds a text node.
    ///
    /// Whitespace-only text counts.
    pub captioned: bool,
}

pub(crate) fn first_untranslated<'a, I>(texts: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a LocalizedText>,
{
    texts
        .into_iter()
        .find(|t| t.is_untranslated())
        .map(|t| t.text.as_str())
}
