//! Snapshot persistence for cart state.
//!
//! The cart writes its full state through to a [`SnapshotStore`] after every
//! mutation. The contract is deliberately forgiving: a cart must stay usable
//! with persistence entirely unavailable, so neither operation surfaces an
//! error to the caller. Backends recover internally and report problems via
//! `tracing` only.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::item::LineItem;

/// Errors internal to snapshot backends.
///
/// Never crosses the [`SnapshotStore`] boundary; used by backends to decide
/// what to log before recovering.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Reading or writing the underlying storage failed.
    #[error("snapshot storage error: {0}")]
    Io(#[from] std::io::Error),
    /// The stored snapshot is not valid JSON for a line-item list.
    #[error("snapshot is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Persistence collaborator consumed by the cart.
///
/// `load` returns the last persisted snapshot, or an empty list when no
/// snapshot exists or the stored one is unreadable or corrupt. `save`
/// replaces the snapshot with the given state, best-effort.
pub trait SnapshotStore {
    /// Restore the last persisted snapshot. Never fails; internal errors
    /// are recovered as an empty cart.
    fn load(&self) -> Vec<LineItem>;

    /// Persist the given state as the new snapshot. Best-effort; internal
    /// errors are logged, not propagated.
    fn save(&self, items: &[LineItem]);
}
