//! Item identification.
//!
//! Every catalog entry has a unique `ItemId`. Identifiers are opaque
//! strings chosen by the application (a title, a slug, a UUID) - the
//! engine never interprets them, it only compares them.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// Unique identifier for one catalog item.
///
/// Identifiers are globally unique across the board: an id never appears
/// in two containers, nor twice in one container. The board enforces this
/// at configuration time and preserves it through every move.
///
/// `Borrow<str>` is implemented so keyed collections can be queried with
/// the raw `&str` ids a drag event carries, without allocating.
///
/// ```
/// use tierboard::core::ItemId;
///
/// let id = ItemId::new("steins-gate");
/// assert_eq!(id.as_str(), "steins-gate");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an item identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
