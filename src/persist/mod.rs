//! Snapshot persistence: JSON-shaped layouts behind a key-value seam.

mod snapshot;
mod store;

pub use snapshot::{restore, Snapshot};
pub use store::{MemoryStore, SnapshotStore, StoreError};
