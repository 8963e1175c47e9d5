//! Error types for reading, parsing and writing the JSON records.
//!
//! Library code returns [`SyncError`]; the binary converts it to
//! [`anyhow::Error`] at the boundary via the standard `?` operator.
//!
//! # Error taxonomy
//!
//! ```text
//! SyncError
//! ├── Io           : file missing, unreadable or unwritable
//! ├── Parse        : file contents are not valid UTF-8 JSON
//! └── NotAnObject  : valid JSON, but the top level is not an object
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort a version sync.
#[derive(Error, Debug)]
pub enum SyncError {
    /// The file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path of the file involved.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid JSON (or not valid UTF-8).
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        /// Path of the file that failed to parse.
        path: PathBuf,
        /// Underlying parser error, carrying line and column.
        source: serde_json::Error,
    },

    /// The file is valid JSON but its top-level value is not an object.
    #[error("expected a JSON object in {}, found {found}", path.display())]
    NotAnObject {
        /// Path of the offending file.
        path: PathBuf,
        /// Kind of value found instead (`"array"`, `"string"`, ...).
        found: &'static str,
    },
}

impl SyncError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the file the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } | Self::NotAnObject { path, .. } => {
                path
            }
        }
    }

    /// Return `true` for failures caused by file contents rather than I/O.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::NotAnObject { .. })
    }
}
