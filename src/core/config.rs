//! Board configuration.
//!
//! Applications configure a board at startup by providing:
//! - the tier names, in display order;
//! - the item catalog, in initial order;
//! - the placement policy for drops onto a container body.
//!
//! The engine never hardcodes tiers or items - boards define them. The
//! container set (the tiers plus the reserved unranked pool) and the
//! catalog are fixed for the lifetime of the board.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::container::{ContainerId, UNRANKED};
use super::item::ItemId;

/// Placement of an item dropped onto a container body rather than onto a
/// specific item inside it.
///
/// Append is the default. Prepend is kept as an explicit configuration
/// choice for boards that want new arrivals at the front.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropPolicy {
    /// Add to the end of the container's sequence.
    #[default]
    Append,
    /// Insert at the front of the container's sequence.
    Prepend,
}

/// Complete board configuration.
///
/// Built with a fluent builder. Construction enforces the uniqueness
/// invariants that the rest of the engine relies on: item ids are unique,
/// tier names are unique, and no identifier collides with a container
/// name (including the reserved unranked pool).
///
/// ## Usage
///
/// ```
/// use tierboard::core::BoardConfig;
///
/// let config = BoardConfig::new()
///     .with_tiers(["S", "A", "B"])
///     .with_items(["steins-gate", "overlord", "k-on"]);
///
/// assert_eq!(config.tiers().len(), 3);
/// assert_eq!(config.catalog().len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BoardConfig {
    /// Tier names in display order. The unranked pool is implicit and
    /// always scans first.
    tiers: Vec<ContainerId>,

    /// Full item catalog in initial order.
    catalog: Vec<ItemId>,

    /// Catalog membership index for O(1) lookups.
    members: FxHashSet<ItemId>,

    /// Placement for drops onto a container body.
    drop_policy: DropPolicy,
}

impl BoardConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tier.
    ///
    /// Panics if the name is empty, repeats an existing tier, collides
    /// with a catalog item, or is the reserved unranked name.
    #[must_use]
    pub fn with_tier(mut self, name: impl Into<String>) -> Self {
        let tier = ContainerId::new(name);
        assert!(!tier.as_str().is_empty(), "Tier name must not be empty");
        assert!(
            !tier.is_unranked(),
            "Tier name {UNRANKED:?} is reserved for the unranked pool"
        );
        assert!(
            !self.tiers.contains(&tier),
            "Duplicate tier name {:?}",
            tier.as_str()
        );
        assert!(
            !self.members.contains(tier.as_str()),
            "Tier name {:?} collides with a catalog item",
            tier.as_str()
        );
        self.tiers.push(tier);
        self
    }

    /// Add several tiers in order.
    #[must_use]
    pub fn with_tiers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self = self.with_tier(name);
        }
        self
    }

    /// Add a catalog item.
    ///
    /// Panics if the id is empty, repeats an existing item, or collides
    /// with a container name.
    #[must_use]
    pub fn with_item(mut self, id: impl Into<String>) -> Self {
        let item = ItemId::new(id);
        assert!(!item.as_str().is_empty(), "Item id must not be empty");
        assert!(
            item.as_str() != UNRANKED,
            "Item id collides with the reserved container name {UNRANKED:?}"
        );
        assert!(
            !self.tiers.iter().any(|t| t.as_str() == item.as_str()),
            "Item id {:?} collides with a tier name",
            item.as_str()
        );
        assert!(
            self.members.insert(item.clone()),
            "Duplicate item id {:?}",
            item.as_str()
        );
        self.catalog.push(item);
        self
    }

    /// Add several catalog items in order.
    #[must_use]
    pub fn with_items<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            self = self.with_item(id);
        }
        self
    }

    /// Set the placement policy for drops onto a container body.
    #[must_use]
    pub fn with_drop_policy(mut self, policy: DropPolicy) -> Self {
        self.drop_policy = policy;
        self
    }

    /// Tier names in display order (the unranked pool is not included).
    #[must_use]
    pub fn tiers(&self) -> &[ContainerId] {
        &self.tiers
    }

    /// The full item catalog in initial order.
    #[must_use]
    pub fn catalog(&self) -> &[ItemId] {
        &self.catalog
    }

    /// The configured container-body drop placement.
    #[must_use]
    pub fn drop_policy(&self) -> DropPolicy {
        self.drop_policy
    }

    /// Check whether an identifier names a catalog item.
    #[must_use]
    pub fn is_catalog_item(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    /// All containers in stable scan order: the unranked pool first, then
    /// the tiers in display order.
    pub fn containers(&self) -> impl Iterator<Item = ContainerId> + '_ {
        std::iter::once(ContainerId::unranked()).chain(self.tiers.iter().cloned())
    }
}
