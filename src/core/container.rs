//! Container identification.
//!
//! Containers are the named ordered buckets of a board: the configured
//! tiers plus one reserved pool, [`UNRANKED`], that holds every item not
//! yet placed in a tier. The container set is fixed for the lifetime of a
//! board; only container *contents* change.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// Name of the reserved pool for items not assigned to any tier.
pub const UNRANKED: &str = "Unranked";

/// Identifier for one container (a tier, or the unranked pool).
///
/// Container names double as drop-target identifiers: a drag may end on a
/// container itself rather than on an item inside it.
///
/// ```
/// use tierboard::core::ContainerId;
///
/// let tier = ContainerId::new("S");
/// assert!(!tier.is_unranked());
/// assert!(ContainerId::unranked().is_unranked());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(String);

impl ContainerId {
    /// Create a container identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The reserved unranked pool.
    #[must_use]
    pub fn unranked() -> Self {
        Self(UNRANKED.to_string())
    }

    /// Check whether this is the reserved unranked pool.
    #[must_use]
    pub fn is_unranked(&self) -> bool {
        self.0 == UNRANKED
    }

    /// Get the container name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContainerId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ContainerId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for ContainerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ContainerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContainerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
