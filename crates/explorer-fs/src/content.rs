//! File content resolution.
//!
//! Every read failure (missing file, permission denied, path is a directory)
//! collapses into a single not-found outcome. The failure is reported with
//! its path and I/O error; file contents never reach the reporter.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;
use tracing::debug;

use explorer_core::error::{AppError, ErrorKind};
use explorer_core::events::ExplorerEvent;
use explorer_core::result::AppResult;
use explorer_core::traits::EventReporter;
use explorer_core::types::{ContentFormat, FileContent, RootSpec};

use crate::decode::{decode_text, escape_html};
use crate::path::{base_name, extension_of};

/// Message carried by every not-found outcome.
pub const FILE_NOT_FOUND: &str = "File not found";

/// Reads and decodes single files.
#[derive(Debug, Clone)]
pub struct ContentResolver {
    /// Sink for absorbed failures.
    reporter: Arc<dyn EventReporter>,
    /// When set, only files under one of these directories are served.
    allowed_roots: Option<Vec<PathBuf>>,
}

impl ContentResolver {
    /// Creates a resolver that serves any readable path.
    pub fn new(reporter: Arc<dyn EventReporter>) -> Self {
        Self {
            reporter,
            allowed_roots: None,
        }
    }

    /// Restricts the resolver to files under the given roots.
    pub fn confined_to(mut self, roots: &[RootSpec]) -> Self {
        self.allowed_roots = Some(roots.iter().map(|r| PathBuf::from(&r.path)).collect());
        self
    }

    /// Reads `file_path` and decodes it.
    ///
    /// Returns an error of kind `NotFound` for every failure; no other error
    /// kind is produced.
    pub async fn read_file_content(
        &self,
        file_path: &str,
        format: ContentFormat,
    ) -> AppResult<FileContent> {
        if !self.is_allowed(file_path).await {
            self.reporter.report(ExplorerEvent::OutsideRoots {
                path: file_path.to_string(),
            });
            return Err(AppError::not_found(FILE_NOT_FOUND));
        }

        let bytes = fs::read(file_path).await.map_err(|e| {
            self.reporter.report(ExplorerEvent::FileReadFailed {
                path: file_path.to_string(),
                error: e.to_string(),
            });
            AppError::with_source(ErrorKind::NotFound, FILE_NOT_FOUND, e)
        })?;

        let text = decode_text(&bytes);
        let size = text.chars().count() as u64;
        debug!(path = file_path, bytes = bytes.len(), chars = size, "Read file");

        let content = match format {
            ContentFormat::Html => escape_html(&text),
            ContentFormat::Text => text,
        };

        let name = base_name(file_path);
        Ok(FileContent {
            extension: extension_of(&name),
            name,
            size,
            content,
            path: file_path.to_string(),
        })
    }

    /// Whether the canonical form of `file_path` lies under an allowed root.
    async fn is_allowed(&self, file_path: &str) -> bool {
        let Some(roots) = &self.allowed_roots else {
            return true;
        };

        let Ok(target) = fs::canonicalize(file_path).await else {
            // Let the read report the real failure.
            return true;
        };

        for root in roots {
            if let Ok(root) = fs::canonicalize(root).await {
                if is_within(&target, &root) {
                    return true;
                }
            }
        }
        false
    }
}

fn is_within(target: &Path, root: &Path) -> bool {
    target.starts_with(root)
}
