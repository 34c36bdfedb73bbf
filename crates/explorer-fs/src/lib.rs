//! # explorer-fs
//!
//! Read-only filesystem access for the directory explorer: recursive tree
//! construction with ignore filtering and deterministic ordering, and
//! BOM-aware file content resolution.

pub mod content;
pub mod decode;
pub mod path;
pub mod tree;

pub use content::ContentResolver;
pub use decode::{decode_text, escape_html};
pub use tree::TreeBuilder;
