//! Parsed AppStream documents.
//!
//! [`AppStreamDocument`] reads a catalog once and keeps an owned snapshot of
//! the parts the checks look at, so several questions can be asked of the
//! same file without parsing it again.

use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, UTF_8};
use roxmltree::{Node, ParsingOptions};
use tracing::debug;

use crate::error::MetadataError;
use crate::types::{first_untranslated, Component, LocalizedText, Screenshot};
use crate::Result;

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Origin recorded for documents parsed from memory.
const IN_MEMORY: &str = "<memory>";

/// An owned snapshot of an AppStream catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppStreamDocument {
    path: PathBuf,
    components: Vec<Component>,
    screenshots: Vec<Screenshot>,
}

impl AppStreamDocument {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// [`MetadataError::NotFound`] if the file is missing,
    /// [`MetadataError::Io`] if it cannot be read,
    /// [`MetadataError::Encoding`] if its bytes do not match its encoding and
    /// [`MetadataError::Parse`] if it is not well-formed XML.
    ///
    /// The encoding comes from a byte order mark, then from the XML
    /// declaration, and is UTF-8 otherwise.
    pub fn parse(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "parsing AppStream document");

        let bytes = std::fs::read(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                MetadataError::NotFound(path.to_path_buf())
            } else {
                MetadataError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let source = decode(&bytes, path)?;
        Self::from_source(&source, path)
    }

    /// Parses an in-memory document.
    pub fn parse_str(source: &str) -> Result<Self> {
        Self::from_source(source, Path::new(IN_MEMORY))
    }

    fn from_source(source: &str, path: &Path) -> Result<Self> {
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;

        let doc = roxmltree::Document::parse_with_options(source, options).map_err(|source| {
            MetadataError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let root = doc.root_element();
        let components: Vec<Component> = if root.has_tag_name("components") {
            root.children()
                .filter(|n| n.has_tag_name("component"))
                .map(read_component)
                .collect()
        } else {
            Vec::new()
        };

        let screenshots: Vec<Screenshot> = doc
            .descendants()
            .filter(|n| n.has_tag_name("screenshot"))
            .map(read_screenshot)
            .collect();

        debug!(
            path = %path.display(),
            components = components.len(),
            screenshots = screenshots.len(),
            "parsed AppStream document"
        );

        Ok(Self {
            path: path.to_path_buf(),
            components,
            screenshots,
        })
    }

    /// Path the document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All `/components/component` records in document order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Every `screenshot` in the document, at any depth.
    pub fn screenshots(&self) -> &[Screenshot] {
        &self.screenshots
    }

    /// The first component.
    ///
    /// # Errors
    ///
    /// [`MetadataError::NoComponent`] when the document has none.
    pub fn first_component(&self) -> Result<&Component> {
        self.components
            .first()
            .ok_or_else(|| MetadataError::NoComponent(self.path.clone()))
    }

    pub fn has_developer_name(&self) -> Result<bool> {
        Ok(self.first_component()?.has_developer_name())
    }

    pub fn has_project_license(&self) -> Result<bool> {
        Ok(self.first_component()?.has_project_license())
    }

    /// The `type` attribute of the first component, `None` when unset.
    pub fn component_type(&self) -> Result<Option<&str>> {
        Ok(self.first_component()?.kind.as_deref())
    }

    pub fn is_console_application(&self) -> Result<bool> {
        Ok(self.first_component()?.is_console_application())
    }

    /// First untagged `name` across all components.
    pub fn untranslated_name(&self) -> Option<&str> {
        first_untranslated(self.components.iter().flat_map(|c| c.names.iter()))
    }

    /// First untagged `summary` across all components.
    pub fn untranslated_summary(&self) -> Option<&str> {
        first_untranslated(self.components.iter().flat_map(|c| c.summaries.iter()))
    }

    /// `true` unless some screenshot lacks a caption with text.
    pub fn all_screenshots_have_captions(&self) -> bool {
        self.screenshots.iter().all(|s| s.captioned)
    }
}

fn decode<'a>(bytes: &'a [u8], path: &Path) -> Result<Cow<'a, str>> {
    let encoding = Encoding::for_bom(bytes)
        .map(|(encoding, _)| encoding)
        .or_else(|| declared_encoding(bytes))
        .unwrap_or(UTF_8);

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(MetadataError::Encoding {
            path: path.to_path_buf(),
            encoding: used.name(),
        });
    }
    if used != UTF_8 {
        debug!(path = %path.display(), encoding = used.name(), "decoded AppStream document");
    }

    Ok(text)
}

/// The `encoding` pseudo-attribute of a leading `<?xml ...?>` declaration.
fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let declaration = bytes.strip_prefix(b"<?xml")?;
    let end = declaration.windows(2).position(|w| w == b"?>")?;
    let declaration = &declaration[..end];

    let start = declaration.windows(8).position(|w| w == b"encoding")? + 8;
    let value = skip_space(skip_space(&declaration[start..]).strip_prefix(b"=")?);
    let (&quote, value) = value.split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let len = value.iter().position(|&b| b == quote)?;

    Encoding::for_label(&value[..len])
}

fn skip_space(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    &bytes[start..]
}

fn read_component(node: Node<'_, '_>) -> Component {
    let mut component = Component {
        kind: node.attribute("type").map(str::to_string),
        ..Default::default()
    };

    for child in node.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "id" if component.id.is_none() => component.id = Some(leading_text(child)),
            "name" => component.names.push(read_localized(child)),
            "summary" => component.summaries.push(read_localized(child)),
            "developer_name" => component.developer_names.push(read_localized(child)),
            "project_license" if component.project_license.is_none() => {
                component.project_license = Some(leading_text(child))
            }
            _ => {}
        }
    }

    component
}

fn read_screenshot(node: Node<'_, '_>) -> Screenshot {
    let captions: Vec<Node<'_, '_>> = node
        .children()
        .filter(|n| n.has_tag_name("caption"))
        .collect();

    Screenshot {
        kind: node.attribute("type").map(str::to_string),
        captioned: captions.iter().any(|c| c.children().any(|n| n.is_text())),
        captions: captions.into_iter().map(read_localized).collect(),
    }
}

fn read_localized(node: Node<'_, '_>) -> LocalizedText {
    LocalizedText {
        lang: node
            .attribute((XML_NAMESPACE, "lang"))
            .filter(|lang| !lang.is_empty())
            .map(str::to_string),
        text: leading_text(node),
    }
}

fn leading_text(node: Node<'_, '_>) -> String {
    node.text().unwrap_or_default().to_string()
}
