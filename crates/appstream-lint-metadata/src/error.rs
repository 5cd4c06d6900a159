//! Error types for metadata operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or validating AppStream metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The metadata file does not exist or is not a regular file.
    #[error("AppStream file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The metadata file exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The metadata file is not well-formed XML.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    /// The metadata file is not valid in its declared encoding.
    #[error("Failed to decode {} as {encoding}", .path.display())]
    Encoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// The document has no `component` to inspect.
    #[error("No component found in {}", .0.display())]
    NoComponent(PathBuf),

    /// The validator executable could not be located.
    #[error("Validator '{program}' is not available: {source}")]
    ValidatorUnavailable {
        program: String,
        #[source]
        source: which::Error,
    },

    /// The validator process could not be started.
    #[error("Failed to run validator '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Validator output was not valid UTF-8.
    #[error("Validator {stream} is not valid UTF-8: {source}")]
    Decode {
        stream: &'static str,
        #[source]
        source: std::string::FromUtf8Error,
    },
}
