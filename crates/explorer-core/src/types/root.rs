//! Root traversal specification.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One configured root: where traversal starts and which names it skips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootSpec {
    /// Display name for the root wrapper entry.
    #[serde(default)]
    pub label: Option<String>,
    /// Filesystem path the traversal starts from.
    pub path: String,
    /// Bare names excluded at every depth, for files and folders alike.
    #[serde(default)]
    pub ignore: BTreeSet<String>,
}

impl RootSpec {
    /// Create an unlabelled root with an empty ignore set.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            label: None,
            path: path.into(),
            ignore: BTreeSet::new(),
        }
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add names to the ignore set.
    pub fn ignoring<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(names.into_iter().map(Into::into));
        self
    }

    /// Whether a bare entry name is excluded from the listing.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.contains(name)
    }

    /// Name of this root's wrapper entry: the label, or the batch index.
    pub fn display_name(&self, index: usize) -> String {
        self.label.clone().unwrap_or_else(|| index.to_string())
    }
}
