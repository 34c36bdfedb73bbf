//! Directory tree entries and the listing response shape.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::id::EntryId;

/// Whether an entry is a file or a folder.
///
/// Variant order is the listing order: folders sort before files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A directory.
    Folder,
    /// Anything that is not a directory.
    File,
}

/// A node in a directory tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Random identifier, absent when identifiers are disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,
    /// Base name of the file or folder.
    pub name: String,
    /// Filesystem path, rooted the same way as the configured root.
    pub path: String,
    /// Kind-specific fields.
    #[serde(flatten)]
    pub detail: EntryDetail,
}

/// Fields that only one kind of entry carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntryDetail {
    /// A folder always owns its (possibly empty) children.
    Folder {
        /// Ordered child entries.
        children: Vec<Entry>,
    },
    /// A file carries its byte size and extension.
    File {
        /// Size in bytes.
        size: u64,
        /// Extension including the leading dot, or empty.
        #[serde(rename = "ext")]
        extension: String,
    },
}

impl Entry {
    /// Create a folder entry.
    pub fn folder(
        id: Option<EntryId>,
        name: impl Into<String>,
        path: impl Into<String>,
        children: Vec<Entry>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            path: path.into(),
            detail: EntryDetail::Folder { children },
        }
    }

    /// Create a file entry.
    pub fn file(
        id: Option<EntryId>,
        name: impl Into<String>,
        path: impl Into<String>,
        size: u64,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            path: path.into(),
            detail: EntryDetail::File {
                size,
                extension: extension.into(),
            },
        }
    }

    /// The entry's kind.
    pub fn kind(&self) -> EntryKind {
        match self.detail {
            EntryDetail::Folder { .. } => EntryKind::Folder,
            EntryDetail::File { .. } => EntryKind::File,
        }
    }

    /// Children of a folder; `None` for files.
    pub fn children(&self) -> Option<&[Entry]> {
        match &self.detail {
            EntryDetail::Folder { children } => Some(children),
            EntryDetail::File { .. } => None,
        }
    }

    /// Consume the entry, returning a folder's children (empty for files).
    pub fn into_children(self) -> Vec<Entry> {
        match self.detail {
            EntryDetail::Folder { children } => children,
            EntryDetail::File { .. } => Vec::new(),
        }
    }

    /// Byte size of a file; `None` for folders.
    pub fn size(&self) -> Option<u64> {
        match self.detail {
            EntryDetail::File { size, .. } => Some(size),
            EntryDetail::Folder { .. } => None,
        }
    }

    /// Listing order: folders first, then case-sensitive by name.
    pub fn listing_cmp(&self, other: &Self) -> Ordering {
        self.kind()
            .cmp(&other.kind())
            .then_with(|| self.name.cmp(&other.name))
    }

    /// Depth-first iterator over this entry and all its descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

/// Iterator returned by [`Entry::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<&'a Entry>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        if let Some(children) = entry.children() {
            self.stack.extend(children.iter().rev());
        }
        Some(entry)
    }
}

/// Body of a listing response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ListingResponse {
    /// One folder wrapper per configured root, in configuration order.
    Roots(Vec<Entry>),
    /// Root name mapped to that root's children.
    Grouped(BTreeMap<String, Vec<Entry>>),
}

impl ListingResponse {
    /// Shape root wrappers according to the grouping option.
    pub fn from_roots(roots: Vec<Entry>, group_by_label: bool) -> Self {
        if group_by_label {
            Self::Grouped(
                roots
                    .into_iter()
                    .map(|root| (root.name.clone(), root.into_children()))
                    .collect(),
            )
        } else {
            Self::Roots(roots)
        }
    }
}
