//! Shared domain types: tree entries, root specifications, file contents.

pub mod content;
pub mod entry;
pub mod id;
pub mod root;

pub use content::{ContentFormat, FileContent};
pub use entry::{Entry, EntryDetail, EntryKind, ListingResponse};
pub use id::EntryId;
pub use root::RootSpec;
