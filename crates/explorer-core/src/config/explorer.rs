//! Directory listing configuration: roots, listing shape, and I/O limits.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::types::RootSpec;

/// Default length of generated entry identifiers.
pub const DEFAULT_ID_LENGTH: NonZeroUsize = match NonZeroUsize::new(32) {
    Some(n) => n,
    None => unreachable!(),
};

/// Default number of directory reads allowed in flight at once.
pub const DEFAULT_MAX_CONCURRENT_READS: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(n) => n,
    None => unreachable!(),
};

/// Default number of folder levels below a root that are expanded.
pub const DEFAULT_MAX_DEPTH: NonZeroUsize = match NonZeroUsize::new(128) {
    Some(n) => n,
    None => unreachable!(),
};

/// Explorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Roots exposed by `GET /files`, in response order.
    #[serde(default = "default_roots")]
    pub roots: Vec<RootSpec>,
    /// Shape of the listing response.
    #[serde(default)]
    pub listing: ListingOptions,
    /// Length of generated entry identifiers.
    #[serde(default = "default_id_length")]
    pub id_length: NonZeroUsize,
    /// Maximum concurrent directory listings across one builder.
    #[serde(default = "default_max_concurrent_reads")]
    pub max_concurrent_reads: NonZeroUsize,
    /// Folders nested deeper than this below a root are listed with empty
    /// children.
    #[serde(default = "default_max_depth")]
    pub max_depth: NonZeroUsize,
    /// Only serve file contents that live under one of the configured roots.
    #[serde(default)]
    pub confine_to_roots: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            listing: ListingOptions::default(),
            id_length: DEFAULT_ID_LENGTH,
            max_concurrent_reads: DEFAULT_MAX_CONCURRENT_READS,
            max_depth: DEFAULT_MAX_DEPTH,
            confine_to_roots: false,
        }
    }
}

/// Listing variants: identifier presence, response grouping and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingOptions {
    /// Attach a random identifier to every entry.
    #[serde(default = "default_true")]
    pub include_ids: bool,
    /// Return an object keyed by root name instead of an array of wrappers.
    #[serde(default)]
    pub group_by_label: bool,
    /// Order children folder-first, then by name.
    #[serde(default = "default_true")]
    pub sort_entries: bool,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            include_ids: true,
            group_by_label: false,
            sort_entries: true,
        }
    }
}

fn default_roots() -> Vec<RootSpec> {
    vec![RootSpec::new(".").with_label("@root").ignoring(["node_modules"])]
}

fn default_id_length() -> NonZeroUsize {
    DEFAULT_ID_LENGTH
}

fn default_max_concurrent_reads() -> NonZeroUsize {
    DEFAULT_MAX_CONCURRENT_READS
}

fn default_max_depth() -> NonZeroUsize {
    DEFAULT_MAX_DEPTH
}

fn default_true() -> bool {
    true
}
