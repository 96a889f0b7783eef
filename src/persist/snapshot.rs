//! Snapshot format and normalizing restore.
//!
//! A snapshot is the JSON-shaped persisted form of a partition: container
//! name to ordered list of item id strings. Snapshots come back from
//! storage with no guarantees - stale catalogs, renamed tiers, hand
//! edits - so the restore path re-validates everything against the
//! current configuration instead of trusting the stored layout.

use std::collections::BTreeMap;

use im::{HashMap as ImHashMap, Vector};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BoardConfig, ContainerId, ItemId};
use crate::partition::Partition;

/// Persisted board layout: container name to ordered item ids.
///
/// The map is ordered so the serialized form is stable across saves of
/// the same layout.
///
/// ```
/// use tierboard::core::BoardConfig;
/// use tierboard::partition::Partition;
/// use tierboard::persist::Snapshot;
///
/// let config = BoardConfig::new().with_tier("S").with_item("x");
/// let snapshot = Snapshot::of(&Partition::initial(&config));
/// assert_eq!(snapshot.items("Unranked"), ["x"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(BTreeMap<String, Vec<String>>);

impl Snapshot {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the layout of a partition.
    #[must_use]
    pub fn of(partition: &Partition) -> Self {
        let mut entries = BTreeMap::new();
        for container in partition.containers() {
            entries.insert(
                container.as_str().to_string(),
                partition
                    .items(container.as_str())
                    .map(|item| item.as_str().to_string())
                    .collect(),
            );
        }
        Self(entries)
    }

    /// Set the entry for a container, replacing any previous one.
    ///
    /// Mainly useful for building fixtures; entries are not validated
    /// here, restore does that.
    pub fn set<I, S>(&mut self, container: impl Into<String>, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .insert(container.into(), items.into_iter().map(Into::into).collect());
    }

    /// The stored ids for a container. Empty for an absent entry.
    #[must_use]
    pub fn items(&self, container: &str) -> &[String] {
        self.0.get(container).map_or(&[], Vec::as_slice)
    }

    /// Stored container names, in map order.
    pub fn containers(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Rebuild a partition from a snapshot, re-validating the catalog
/// invariant.
///
/// Normalization rules, applied in stable container scan order:
/// - ids that are not in the catalog are dropped;
/// - entries under container names the configuration does not know are
///   dropped entirely;
/// - an id already placed by an earlier entry is dropped again - first
///   occurrence wins, an item is never duplicated;
/// - catalog items the snapshot placed nowhere are appended to the
///   unranked pool in catalog order.
///
/// Every dropped or recovered id is warn-logged; restore itself never
/// fails.
#[must_use]
pub fn restore(config: &BoardConfig, snapshot: &Snapshot) -> Partition {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut order: SmallVec<[ContainerId; 8]> = SmallVec::new();
    let mut contents: ImHashMap<ContainerId, Vector<ItemId>> = ImHashMap::new();

    for container in config.containers() {
        let mut seq = Vector::new();
        for raw in snapshot.items(container.as_str()) {
            if !config.is_catalog_item(raw) {
                tracing::warn!(
                    container = container.as_str(),
                    id = raw.as_str(),
                    "dropping persisted id not in the catalog"
                );
                continue;
            }
            if !seen.insert(raw) {
                tracing::warn!(
                    container = container.as_str(),
                    id = raw.as_str(),
                    "dropping duplicate persisted id, first occurrence wins"
                );
                continue;
            }
            seq.push_back(ItemId::new(raw.clone()));
        }
        contents.insert(container.clone(), seq);
        order.push(container);
    }

    for name in snapshot.containers() {
        if !order.iter().any(|c| c.as_str() == name) {
            tracing::warn!(container = name, "dropping entry for unknown container");
        }
    }

    let unranked = ContainerId::unranked();
    let mut pool = contents
        .get(unranked.as_str())
        .cloned()
        .unwrap_or_default();
    for item in config.catalog() {
        if !seen.contains(item.as_str()) {
            tracing::warn!(id = item.as_str(), "catalog item missing from snapshot, restoring to the unranked pool");
            pool.push_back(item.clone());
        }
    }
    contents.insert(unranked, pool);

    Partition::from_parts(order, contents)
}
