//! Error types for beztri-io.

use std::path::PathBuf;

use beztri_core::PatchError;
use thiserror::Error;

/// Result type for beztri-io operations.
pub type Result<T> = std::result::Result<T, ImportError>;

/// Errors that can occur while importing or exporting a scene.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The scene file could not be read or written.
    #[error("io error for {path:?}: {source}")]
    Io {
        /// Path of the file being accessed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scene data is not valid UTF-8 text.
    #[error("scene data is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// A line had the wrong token count or an unparsable token.
    #[error("malformed line {line}: {reason} (in {raw:?})")]
    MalformedLine {
        /// 1-based line number in the source text.
        line: usize,
        /// What made the line unparsable.
        reason: String,
        /// The offending line, trimmed.
        raw: String,
    },

    /// A patch line referenced a vertex that does not exist.
    #[error("line {line}: patch index {index} out of range (vertex count {vertex_count})")]
    IndexOutOfRange {
        /// 1-based line number in the source text.
        line: usize,
        /// The offending index.
        index: u32,
        /// Vertex count at the time the patch line was parsed.
        vertex_count: usize,
    },

    /// A patch could not be constructed from its resolved control points.
    #[error("invalid patch: {0}")]
    InvalidPatch(#[from] PatchError),
}

impl ImportError {
    /// Create a malformed-line error.
    pub fn malformed(line: usize, raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            reason: reason.into(),
            raw: raw.into(),
        }
    }

    /// Create an io error carrying the path being accessed.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
