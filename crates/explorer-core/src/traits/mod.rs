//! Core traits defined in `explorer-core` and implemented by other crates.

pub mod reporter;

pub use reporter::{EventReporter, RecordingReporter, TracingReporter};
