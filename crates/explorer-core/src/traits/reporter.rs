//! Event reporting seam for absorbed filesystem failures.

use std::sync::{Arc, Mutex};

use crate::events::ExplorerEvent;

/// Receives events for failures the explorer recovers from locally.
///
/// Injected into the tree builder and content resolver so the core does
/// not depend on any particular logging backend.
pub trait EventReporter: Send + Sync + std::fmt::Debug + 'static {
    /// Record one event. Must not block.
    fn report(&self, event: ExplorerEvent);
}

/// Reports events as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl EventReporter for TracingReporter {
    fn report(&self, event: ExplorerEvent) {
        match &event {
            ExplorerEvent::TraversalFailed { path, error } => {
                tracing::warn!(path = %path, error = %error, "Directory listing failed");
            }
            ExplorerEvent::EntryStatFailed { path, error } => {
                tracing::warn!(path = %path, error = %error, "Entry stat failed");
            }
            ExplorerEvent::DepthLimitExceeded { path, depth } => {
                tracing::warn!(path = %path, depth = *depth, "Folder depth limit reached");
            }
            ExplorerEvent::FileReadFailed { path, error } => {
                tracing::warn!(path = %path, error = %error, "File read failed");
            }
            ExplorerEvent::OutsideRoots { path } => {
                tracing::warn!(path = %path, "File request outside configured roots");
            }
        }
    }
}

/// Keeps every reported event in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<ExplorerEvent>>>,
}

impl RecordingReporter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events reported so far.
    pub fn events(&self) -> Vec<ExplorerEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl EventReporter for RecordingReporter {
    fn report(&self, event: ExplorerEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
