//! Key-value persistence for snapshots.
//!
//! The board does not talk to storage directly: it produces and consumes
//! [`Snapshot`] values, and a `SnapshotStore` moves their serialized JSON
//! form in and out of some backing store. The in-memory implementation
//! mirrors browser local-storage semantics (string keys, string values)
//! and doubles as the test double.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::snapshot::Snapshot;

/// Persistence failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The snapshot could not be encoded or decoded.
    #[error("snapshot codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// The backing store rejected the operation.
    #[error("storage backend error: {message}")]
    Backend {
        /// Backend-specific description.
        message: String,
    },
}

/// A key-value store for serialized snapshots.
pub trait SnapshotStore {
    /// Persist a snapshot under a key, replacing any previous value.
    fn put(&mut self, key: &str, snapshot: &Snapshot) -> Result<(), StoreError>;

    /// Load the snapshot stored under a key, if any.
    fn get(&self, key: &str) -> Result<Option<Snapshot>, StoreError>;
}

/// In-memory snapshot store.
///
/// Keeps the serialized JSON strings rather than the decoded values, so
/// `put`/`get` exercise the same codec path a real backend would.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the store holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn put(&mut self, key: &str, snapshot: &Snapshot) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(snapshot)?;
        self.entries.insert(key.to_string(), encoded);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Snapshot>, StoreError> {
        match self.entries.get(key) {
            Some(encoded) => Ok(Some(serde_json::from_str(encoded)?)),
            None => Ok(None),
        }
    }
}
