//! # tierboard
//!
//! A drag-and-drop tier list engine: a fixed catalog of items sorted into
//! named ranking containers, with one reserved pool for everything not
//! yet ranked.
//!
//! The crate is UI-agnostic. A presentation layer feeds it drag-start and
//! drag-end events and renders from the state it exposes; nothing here
//! draws, animates, or handles pointers.
//!
//! ## Design Principles
//!
//! 1. **Catalog-Agnostic**: No hardcoded tiers or items. Boards configure
//!    both at startup via `BoardConfig`.
//!
//! 2. **Pure Transitions**: `apply_move` is a pure function from a
//!    partition and a drop to the next partition. Unresolvable drops are
//!    no-ops, never errors.
//!
//! 3. **Wholesale Replacement**: the partition is a persistent value
//!    (`im`), replaced atomically on every move. No reader ever observes
//!    a half-applied drag.
//!
//! 4. **One Item, One Container**: every catalog item lives in exactly one
//!    container at all times. Configuration enforces it up front, the move
//!    operator preserves it, and restore re-establishes it for whatever
//!    storage hands back.
//!
//! ## Modules
//!
//! - `core`: item and container identifiers, board configuration
//! - `partition`: the container-contents store and item location lookup
//! - `moves`: the move operator applied on completed drags
//! - `session`: the drag-in-progress state machine (overlay rendering)
//! - `board`: the event surface tying the pieces together
//! - `persist`: JSON-shaped snapshots and the key-value store seam

pub mod board;
pub mod core;
pub mod moves;
pub mod partition;
pub mod persist;
pub mod session;

// Re-export commonly used types
pub use crate::core::{BoardConfig, ContainerId, DropPolicy, ItemId, UNRANKED};

pub use crate::board::Board;

pub use crate::moves::apply_move;

pub use crate::partition::Partition;

pub use crate::persist::{restore, MemoryStore, Snapshot, SnapshotStore, StoreError};

pub use crate::session::DragSession;
