use thiserror::Error;

use crate::io::{Format, IoError};

/// Configuration errors raised by the validator before any record is checked.
///
/// Record-level problems never surface here; they become report messages.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// A read was required but no source path was set.
    #[error("no file path provided")]
    NoSourcePath,

    /// Source format could not be resolved from the path.
    #[error("failed to resolve source format: {source}")]
    ResolveSource {
        #[source]
        source: IoError,
    },

    /// Source file could not be opened.
    #[error("failed to open source file `{path}`: {source}")]
    OpenSource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Source could not be parsed in the resolved format.
    #[error("failed to read {format} source: {source}")]
    ReadSource {
        format: Format,
        #[source]
        source: IoError,
    },
}
