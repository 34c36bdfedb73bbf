//! Events emitted when a filesystem failure is absorbed.
//!
//! Traversal and content resolution never surface environmental errors to
//! the caller; they degrade to empty children or a not-found outcome and
//! report one of these events instead. Events never carry file contents.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An absorbed filesystem failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExplorerEvent {
    /// A directory could not be listed; its children were reported empty.
    TraversalFailed {
        /// The directory path.
        path: String,
        /// The underlying I/O error.
        error: String,
    },
    /// An entry could not be stat'ed; it was listed with size 0.
    EntryStatFailed {
        /// The entry path.
        path: String,
        /// The underlying I/O error.
        error: String,
    },
    /// A folder lies deeper than the configured limit; its children were
    /// not listed.
    DepthLimitExceeded {
        /// The folder path.
        path: String,
        /// The folder's depth below its root.
        depth: usize,
    },
    /// A file could not be read; the caller received not-found.
    FileReadFailed {
        /// The requested path.
        path: String,
        /// The underlying I/O error.
        error: String,
    },
    /// A file was requested from outside every configured root.
    OutsideRoots {
        /// The requested path.
        path: String,
    },
}

impl ExplorerEvent {
    /// The path the event concerns.
    pub fn path(&self) -> &str {
        match self {
            Self::TraversalFailed { path, .. }
            | Self::EntryStatFailed { path, .. }
            | Self::DepthLimitExceeded { path, .. }
            | Self::FileReadFailed { path, .. }
            | Self::OutsideRoots { path } => path,
        }
    }
}

impl fmt::Display for ExplorerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TraversalFailed { path, error } => {
                write!(f, "failed to list directory {path}: {error}")
            }
            Self::EntryStatFailed { path, error } => {
                write!(f, "failed to stat {path}: {error}")
            }
            Self::DepthLimitExceeded { path, depth } => {
                write!(f, "not descending into {path} at depth {depth}")
            }
            Self::FileReadFailed { path, error } => {
                write!(f, "failed to read file {path}: {error}")
            }
            Self::OutsideRoots { path } => {
                write!(f, "{path} is outside every configured root")
            }
        }
    }
}
