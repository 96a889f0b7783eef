//! The board: configuration, partition, and drag session behind one
//! event surface.
//!
//! A `Board` is what a presentation layer talks to. It consumes
//! drag-start / drag-end events, keeps the partition and the drag
//! session in sync, and exposes both for rendering. All mutation goes
//! through the move operator; the partition is swapped wholesale per
//! completed drag, never edited in place.

use crate::core::{BoardConfig, ItemId};
use crate::moves::apply_move;
use crate::partition::Partition;
use crate::persist::{restore, Snapshot, SnapshotStore, StoreError};
use crate::session::DragSession;

/// A tier board: fixed catalog, fixed containers, drag-driven layout.
///
/// ## Usage
///
/// ```
/// use tierboard::board::Board;
/// use tierboard::core::BoardConfig;
///
/// let mut board = Board::new(
///     BoardConfig::new()
///         .with_tiers(["S", "A"])
///         .with_items(["x", "y"]),
/// );
///
/// board.drag_start("x");
/// board.drag_end("x", Some("S"));
///
/// assert_eq!(board.partition().locate("x").map(|c| c.as_str()), Some("S"));
/// assert!(board.active_item().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    partition: Partition,
    session: DragSession,
}

impl Board {
    /// Create a board with the initial layout: the whole catalog in the
    /// unranked pool, every tier empty.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        let partition = Partition::initial(&config);
        Self {
            config,
            partition,
            session: DragSession::default(),
        }
    }

    /// The board configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The current partition, for rendering container contents in order.
    #[must_use]
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// The current drag session, for overlay rendering.
    #[must_use]
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// The item currently mid-drag, if any.
    #[must_use]
    pub fn active_item(&self) -> Option<&ItemId> {
        self.session.active()
    }

    // === Drag events ===

    /// Record a drag-start.
    ///
    /// Identifiers that are not on the board are ignored: the session
    /// only exists to render an overlay, and there is nothing to render
    /// for an unknown id.
    pub fn drag_start(&mut self, item_id: &str) {
        if self.partition.contains_item(item_id) {
            self.session.begin(ItemId::new(item_id));
        } else {
            tracing::debug!(id = item_id, "drag-start for an id not on the board, ignoring");
        }
    }

    /// Record a drag-end, applying the move when a target is present.
    ///
    /// The session is cleared unconditionally - with or without a target,
    /// and whether or not the move changed anything. Returns `true` when
    /// the layout changed.
    pub fn drag_end(&mut self, active_id: &str, over_id: Option<&str>) -> bool {
        let mut changed = false;
        if let Some(over_id) = over_id {
            let next = apply_move(
                &self.partition,
                active_id,
                over_id,
                self.config.drop_policy(),
            );
            if next != self.partition {
                self.partition = next;
                changed = true;
            }
        }
        self.session.finish();
        changed
    }

    /// Record a cancelled drag: clear the session, touch nothing else.
    pub fn cancel_drag(&mut self) {
        self.session.finish();
    }

    // === Persistence ===

    /// Capture the current layout.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.partition)
    }

    /// Replace the layout with a restored snapshot, normalized against
    /// this board's configuration. Any in-flight drag session is cleared.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.partition = restore(&self.config, snapshot);
        self.session.finish();
    }

    /// Persist the current layout under a key.
    pub fn save_to<S: SnapshotStore>(&self, store: &mut S, key: &str) -> Result<(), StoreError> {
        store.put(key, &self.snapshot())
    }

    /// Load and restore the layout stored under a key.
    ///
    /// Returns `false`, leaving the board untouched, when the store has
    /// no entry for the key.
    pub fn load_from<S: SnapshotStore>(
        &mut self,
        store: &S,
        key: &str,
    ) -> Result<bool, StoreError> {
        match store.get(key)? {
            Some(snapshot) => {
                self.restore(&snapshot);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
