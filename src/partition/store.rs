//! The partition: container contents and item location lookup.
//!
//! The `Partition` is the authoritative assignment of every catalog item
//! to exactly one container, with order. It supports:
//! - Ordered per-container sequences
//! - Item lookup by identifier (which container owns it)
//! - Drop-target resolution (container name, or owning container of an
//!   item)
//!
//! A partition is a value: move operations build a new one and the owner
//! swaps it in wholesale. The `im` structures make that swap structurally
//! shared, so a retained clone stays internally consistent while the
//! board moves on.

use im::{HashMap as ImHashMap, Vector};
use smallvec::SmallVec;

use crate::core::{BoardConfig, ContainerId, ItemId};

/// Container contents keyed by container, with a stable scan order.
///
/// Scan order is fixed at creation: the unranked pool first, then the
/// tiers in display order. Every lookup that walks containers uses this
/// order, so "first container holding the id" is deterministic - and the
/// uniqueness invariant makes it also the *only* one.
///
/// ## Usage
///
/// ```
/// use tierboard::core::BoardConfig;
/// use tierboard::partition::Partition;
///
/// let config = BoardConfig::new()
///     .with_tiers(["S", "A"])
///     .with_items(["x", "y"]);
///
/// let partition = Partition::initial(&config);
/// assert_eq!(partition.locate("x").map(|c| c.as_str()), Some("Unranked"));
/// assert_eq!(partition.container_len("S"), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    /// Containers in scan order. Small and fixed: the pool plus a
    /// handful of tiers, kept inline.
    order: SmallVec<[ContainerId; 8]>,

    /// Ordered item sequences per container.
    contents: ImHashMap<ContainerId, Vector<ItemId>>,
}

impl Partition {
    /// The initial partition for a configuration: every catalog item in
    /// the unranked pool in catalog order, every tier empty.
    #[must_use]
    pub fn initial(config: &BoardConfig) -> Self {
        let order: SmallVec<[ContainerId; 8]> = config.containers().collect();

        let mut contents = ImHashMap::new();
        for container in &order {
            let seq = if container.is_unranked() {
                config.catalog().iter().cloned().collect()
            } else {
                Vector::new()
            };
            contents.insert(container.clone(), seq);
        }

        Self { order, contents }
    }

    /// Assemble a partition from pre-validated parts.
    ///
    /// Callers must uphold the uniqueness invariant; this is the seam the
    /// restore path uses after normalizing persisted state.
    pub(crate) fn from_parts(
        order: SmallVec<[ContainerId; 8]>,
        contents: ImHashMap<ContainerId, Vector<ItemId>>,
    ) -> Self {
        Self { order, contents }
    }

    /// A new partition with the given container sequences replaced.
    ///
    /// All replacements land in one construction, so readers of the
    /// result never observe a half-applied move.
    pub(crate) fn with_replaced<I>(&self, updates: I) -> Self
    where
        I: IntoIterator<Item = (ContainerId, Vector<ItemId>)>,
    {
        let mut contents = self.contents.clone();
        for (container, seq) in updates {
            contents.insert(container, seq);
        }
        Self {
            order: self.order.clone(),
            contents,
        }
    }

    /// Containers in stable scan order.
    pub fn containers(&self) -> impl Iterator<Item = &ContainerId> {
        self.order.iter()
    }

    /// Check whether an identifier names a container of this partition.
    #[must_use]
    pub fn is_container(&self, id: &str) -> bool {
        self.order.iter().any(|c| c.as_str() == id)
    }

    /// Items of a container, in order. Empty for an unknown container.
    pub fn items<'a>(&'a self, container: &str) -> impl Iterator<Item = &'a ItemId> + 'a {
        self.contents.get(container).into_iter().flatten()
    }

    /// The ordered sequence of a container, if the container exists.
    #[must_use]
    pub(crate) fn sequence(&self, container: &str) -> Option<&Vector<ItemId>> {
        self.contents.get(container)
    }

    /// Find the container owning an item.
    ///
    /// Scans containers in stable order and returns the first whose
    /// sequence contains the identifier. `None` when no container holds
    /// it - callers treat that as a no-op signal, not a failure.
    #[must_use]
    pub fn locate(&self, item_id: &str) -> Option<&ContainerId> {
        self.order.iter().find(|container| {
            self.contents
                .get(container.as_str())
                .is_some_and(|seq| seq.iter().any(|item| item.as_str() == item_id))
        })
    }

    /// Resolve a raw drop-target identifier to a container.
    ///
    /// A container name resolves to itself; anything else resolves to the
    /// container owning that item, if any. Identifier collisions between
    /// the two namespaces are ruled out at configuration time.
    #[must_use]
    pub fn resolve_container(&self, target_id: &str) -> Option<&ContainerId> {
        self.order
            .iter()
            .find(|c| c.as_str() == target_id)
            .or_else(|| self.locate(target_id))
    }

    /// Check whether any container holds the item.
    #[must_use]
    pub fn contains_item(&self, item_id: &str) -> bool {
        self.locate(item_id).is_some()
    }

    /// Number of items in a container. Zero for an unknown container.
    #[must_use]
    pub fn container_len(&self, container: &str) -> usize {
        self.contents.get(container).map_or(0, Vector::len)
    }

    /// Total number of items across all containers.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.order
            .iter()
            .map(|c| self.container_len(c.as_str()))
            .sum()
    }
}
