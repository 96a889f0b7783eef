//! Drag session tracking.
//!
//! A tiny state machine recording which item is mid-drag, so a
//! presentation layer can render a floating copy of it. It carries no
//! authority over the partition: moves apply whether or not a session was
//! recorded.

use serde::{Deserialize, Serialize};

use crate::core::ItemId;

/// The current drag, if any.
///
/// Transitions: `Idle -> Dragging(id)` on drag-start, `Dragging -> Idle`
/// on drag-end or cancellation. At most one item is ever active.
///
/// ```
/// use tierboard::session::DragSession;
///
/// let mut session = DragSession::default();
/// assert!(!session.is_dragging());
///
/// session.begin("x".into());
/// assert_eq!(session.active().map(|i| i.as_str()), Some("x"));
///
/// session.finish();
/// assert!(!session.is_dragging());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragSession {
    /// No drag in progress.
    #[default]
    Idle,
    /// An item is mid-drag.
    Dragging(ItemId),
}

impl DragSession {
    /// Record a drag-start. A start while another drag is active replaces
    /// it: the pointer stream that produced the new start has necessarily
    /// ended the old one.
    pub fn begin(&mut self, item: ItemId) {
        *self = Self::Dragging(item);
    }

    /// Record a drag-end or cancellation, returning the item that was
    /// active.
    pub fn finish(&mut self) -> Option<ItemId> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Dragging(item) => Some(item),
        }
    }

    /// The item currently mid-drag, if any.
    #[must_use]
    pub fn active(&self) -> Option<&ItemId> {
        match self {
            Self::Idle => None,
            Self::Dragging(item) => Some(item),
        }
    }

    /// Check whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}
