//! Request DTOs.

use serde::Deserialize;

/// Query string of `GET /files`.
///
/// Without `file_path` the endpoint returns the directory listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilesQuery {
    /// File to read, already percent-decoded by the extractor.
    #[serde(default)]
    pub file_path: Option<String>,
    /// `html` escapes the content; anything else returns raw text.
    #[serde(default)]
    pub content_type: Option<String>,
}

impl FilesQuery {
    /// The requested file, treating an empty value as absent.
    pub fn requested_file(&self) -> Option<&str> {
        self.file_path.as_deref().filter(|p| !p.is_empty())
    }
}
