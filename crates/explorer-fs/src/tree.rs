//! Directory tree building.
//!
//! Traversal failures never propagate: an unreadable directory contributes
//! an empty children list and a [`ExplorerEvent::TraversalFailed`] report,
//! so one inaccessible subtree cannot abort the whole listing.
//!
//! Directories are listed one level at a time into a flat arena of pending
//! folders, and the tree is assembled bottom-up afterwards. Neither step
//! recurses, so stack use does not grow with tree depth.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::join_all;
use tokio::fs;
use tokio::sync::Semaphore;
use tracing::debug;

use explorer_core::config::explorer::DEFAULT_MAX_DEPTH;
use explorer_core::config::{ExplorerConfig, ListingOptions};
use explorer_core::events::ExplorerEvent;
use explorer_core::traits::EventReporter;
use explorer_core::types::{Entry, EntryId, RootSpec};

use crate::path::{child_path, display, extension_of};

/// Builds ordered entry trees from the live filesystem.
///
/// Cloning is cheap; clones share the read limiter and the reporter.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    /// Listing variants.
    options: ListingOptions,
    /// Length of generated identifiers.
    id_length: NonZeroUsize,
    /// Folders at this depth below a root are not expanded.
    max_depth: NonZeroUsize,
    /// Bounds the number of directories being listed at once.
    read_permits: Arc<Semaphore>,
    /// Sink for absorbed failures.
    reporter: Arc<dyn EventReporter>,
}

/// A listed directory child, before folders are descended into.
enum Slot {
    Ready(Entry),
    Folder { name: String, path: PathBuf },
}

/// A folder found during traversal whose entry is not built yet.
struct PendingFolder {
    id: Option<EntryId>,
    name: String,
    path: PathBuf,
    items: Vec<Item>,
}

/// A child of a pending folder. Folders refer to their arena index, which is
/// always greater than their parent's.
enum Item {
    Entry(Entry),
    Folder(usize),
}

impl TreeBuilder {
    /// Creates a tree builder from explorer configuration.
    pub fn new(config: &ExplorerConfig, reporter: Arc<dyn EventReporter>) -> Self {
        Self::with_options(
            config.listing,
            config.id_length,
            config.max_concurrent_reads,
            reporter,
        )
        .with_max_depth(config.max_depth)
    }

    /// Creates a tree builder from explicit settings, with the default depth
    /// limit.
    pub fn with_options(
        options: ListingOptions,
        id_length: NonZeroUsize,
        max_concurrent_reads: NonZeroUsize,
        reporter: Arc<dyn EventReporter>,
    ) -> Self {
        Self {
            options,
            id_length,
            max_depth: DEFAULT_MAX_DEPTH,
            read_permits: Arc::new(Semaphore::new(max_concurrent_reads.get())),
            reporter,
        }
    }

    /// Sets the depth at which folders stop being expanded.
    pub fn with_max_depth(mut self, max_depth: NonZeroUsize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Traverses every root concurrently, returning one folder wrapper per
    /// root in the order given.
    pub async fn build_all(&self, roots: &[RootSpec]) -> Vec<Entry> {
        join_all(
            roots
                .iter()
                .enumerate()
                .map(|(index, root)| self.build_root(index, root)),
        )
        .await
    }

    /// Wraps one root's traversal in a folder entry named after its label,
    /// or its batch index when unlabelled.
    pub async fn build_root(&self, index: usize, root: &RootSpec) -> Entry {
        let children = self.build_tree(root).await;
        debug!(root = %root.path, entries = children.len(), "Built root listing");
        Entry::folder(
            self.next_id(),
            root.display_name(index),
            root.path.clone(),
            children,
        )
    }

    /// Lists a root's children recursively. Returns an empty list when the
    /// root cannot be read.
    pub async fn build_tree(&self, root: &RootSpec) -> Vec<Entry> {
        let mut folders = vec![PendingFolder {
            id: None,
            name: String::new(),
            path: PathBuf::from(&root.path),
            items: Vec::new(),
        }];
        let mut frontier = vec![0];
        let mut depth = 0;

        while !frontier.is_empty() {
            let listings = join_all(
                frontier
                    .iter()
                    .map(|&index| self.read_level(&folders[index].path, root)),
            )
            .await;
            depth += 1;

            let mut next = Vec::new();
            for (index, slots) in frontier.into_iter().zip(listings) {
                let mut items = Vec::with_capacity(slots.len());
                for slot in slots {
                    match slot {
                        Slot::Ready(entry) => items.push(Item::Entry(entry)),
                        Slot::Folder { name, path } => {
                            let child = folders.len();
                            if depth < self.max_depth.get() {
                                next.push(child);
                            } else {
                                self.reporter.report(ExplorerEvent::DepthLimitExceeded {
                                    path: display(&path),
                                    depth,
                                });
                            }
                            folders.push(PendingFolder {
                                id: self.next_id(),
                                name,
                                path,
                                items: Vec::new(),
                            });
                            items.push(Item::Folder(child));
                        }
                    }
                }
                folders[index].items = items;
            }
            frontier = next;
        }

        self.assemble(folders)
    }

    /// Builds entries from the arena, last folder first, so every child is
    /// complete before its parent takes it. Returns the root's children.
    fn assemble(&self, mut folders: Vec<PendingFolder>) -> Vec<Entry> {
        let mut built: Vec<Option<Entry>> = Vec::new();
        built.resize_with(folders.len(), || None);

        while let Some(folder) = folders.pop() {
            let index = folders.len();
            let mut children: Vec<Entry> = folder
                .items
                .into_iter()
                .filter_map(|item| match item {
                    Item::Entry(entry) => Some(entry),
                    Item::Folder(child) => built[child].take(),
                })
                .collect();

            if self.options.sort_entries {
                children.sort_by(Entry::listing_cmp);
            }
            if index == 0 {
                return children;
            }
            built[index] = Some(Entry::folder(
                folder.id,
                folder.name,
                display(&folder.path),
                children,
            ));
        }

        Vec::new()
    }

    /// Lists one directory, absorbing failure into an empty level.
    async fn read_level(&self, dir: &Path, root: &RootSpec) -> Vec<Slot> {
        match self.list_directory(dir, root).await {
            Ok(slots) => slots,
            Err(e) => {
                self.reporter.report(ExplorerEvent::TraversalFailed {
                    path: display(dir),
                    error: e.to_string(),
                });
                Vec::new()
            }
        }
    }

    /// Reads one directory level. The read permit is held only while this
    /// directory's entries are listed and stat'ed.
    async fn list_directory(&self, dir: &Path, root: &RootSpec) -> std::io::Result<Vec<Slot>> {
        let _permit = self
            .read_permits
            .acquire()
            .await
            .map_err(|_| std::io::Error::other("read limiter closed"))?;

        let mut read_dir = fs::read_dir(dir).await?;
        let mut slots = Vec::new();

        while let Some(dirent) = read_dir.next_entry().await? {
            let name = dirent.file_name().to_string_lossy().into_owned();
            if root.is_ignored(&name) {
                continue;
            }

            let path = child_path(dir, &name);
            let is_dir = dirent
                .file_type()
                .await
                .map(|ft| ft.is_dir())
                .unwrap_or(false);

            if is_dir {
                slots.push(Slot::Folder { name, path });
            } else {
                let size = self.file_size(&path).await;
                let extension = extension_of(&name);
                slots.push(Slot::Ready(Entry::file(
                    self.next_id(),
                    name,
                    display(&path),
                    size,
                    extension,
                )));
            }
        }

        Ok(slots)
    }

    /// Size of a non-directory entry, following symlinks; 0 when it cannot
    /// be stat'ed (broken links, vanished files).
    async fn file_size(&self, path: &Path) -> u64 {
        match fs::metadata(path).await {
            Ok(meta) => meta.len(),
            Err(e) => {
                self.reporter.report(ExplorerEvent::EntryStatFailed {
                    path: display(path),
                    error: e.to_string(),
                });
                0
            }
        }
    }

    fn next_id(&self) -> Option<EntryId> {
        self.options
            .include_ids
            .then(|| EntryId::generate(self.id_length))
    }
}
