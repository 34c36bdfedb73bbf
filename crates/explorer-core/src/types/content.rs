//! Resolved file contents.

use serde::{Deserialize, Serialize};

/// How decoded text should be returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentFormat {
    /// Decoded text as-is.
    #[default]
    Text,
    /// Decoded text with HTML special characters escaped.
    Html,
}

impl ContentFormat {
    /// Parse the `content_type` query value. Only `html` selects escaping.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("html") => Self::Html,
            _ => Self::Text,
        }
    }
}

/// A single file's decoded content with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    /// Base name of the requested path.
    pub name: String,
    /// Number of characters in the decoded (unescaped) text.
    pub size: u64,
    /// Extension of the requested path, including the dot.
    #[serde(rename = "ext")]
    pub extension: String,
    /// Decoded text, HTML-escaped when requested.
    pub content: String,
    /// The path exactly as requested.
    pub path: String,
}
