//! The move operator: partition transitions for completed drags.
//!
//! `apply_move` is a pure transition function. Given the current
//! partition, the dragged item, and the raw drop-target identifier, it
//! returns the next partition. It never mutates its input and never
//! fails: every unresolvable or degenerate drop resolves to the unchanged
//! partition.
//!
//! ## Resolution
//!
//! The drop target is a raw identifier from the event layer. It may name
//! a container (the drag ended on a container body) or an item (the drag
//! ended on top of another item). Container names take precedence;
//! configuration rules out collisions between the two namespaces.
//!
//! ## Index arithmetic
//!
//! A same-container reorder removes the dragged item first and computes
//! the insertion index against the *post-removal* sequence. Removing an
//! item ahead of the target shifts the target down by one; indexing the
//! shortened sequence lands the item exactly before its target either
//! way.

use im::Vector;

use crate::core::{ContainerId, DropPolicy, ItemId};
use crate::partition::Partition;

/// Compute the next partition for a completed drag.
///
/// `active_id` is the dragged item; `over_id` is the raw identifier of
/// whatever the drag ended on. Returns a new partition with the move
/// applied, or a partition equal to the input when the drop resolves to
/// nothing:
///
/// - `active_id` is not on the board;
/// - `over_id` names neither a container nor an item on the board;
/// - the item was dropped onto itself, or onto the body of the container
///   it is already in.
///
/// `policy` decides where a cross-container drop onto a container body
/// lands (end of the sequence by default).
///
/// ```
/// use tierboard::core::{BoardConfig, DropPolicy};
/// use tierboard::moves::apply_move;
/// use tierboard::partition::Partition;
///
/// let config = BoardConfig::new().with_tier("S").with_items(["x", "y"]);
/// let partition = Partition::initial(&config);
///
/// let next = apply_move(&partition, "x", "S", DropPolicy::Append);
/// assert_eq!(next.locate("x").map(|c| c.as_str()), Some("S"));
/// ```
#[must_use]
pub fn apply_move(
    partition: &Partition,
    active_id: &str,
    over_id: &str,
    policy: DropPolicy,
) -> Partition {
    let Some(source) = partition.locate(active_id).cloned() else {
        tracing::debug!(active = active_id, "dragged item not on the board, ignoring drop");
        return partition.clone();
    };

    let Some(target) = partition.resolve_container(over_id).cloned() else {
        tracing::debug!(over = over_id, "drop target unresolved, ignoring drop");
        return partition.clone();
    };

    if source == target {
        reorder_within(partition, &source, active_id, over_id)
    } else {
        move_across(partition, &source, &target, active_id, over_id, policy)
    }
}

/// Reorder within one container: remove the active item, reinsert it at
/// the target item's post-removal index.
fn reorder_within(
    partition: &Partition,
    container: &ContainerId,
    active_id: &str,
    over_id: &str,
) -> Partition {
    if active_id == over_id {
        return partition.clone();
    }

    let Some(seq) = partition.sequence(container.as_str()) else {
        return partition.clone();
    };

    // Dropped on the body of its own container: nothing to reorder.
    if !seq.iter().any(|item| item.as_str() == over_id) {
        return partition.clone();
    }

    let Some(from) = seq.iter().position(|item| item.as_str() == active_id) else {
        return partition.clone();
    };

    let mut next = seq.clone();
    let item = next.remove(from);
    let to = next
        .iter()
        .position(|other| other.as_str() == over_id)
        .unwrap_or_else(|| next.len());
    next.insert(to, item);

    partition.with_replaced([(container.clone(), next)])
}

/// Move between containers: remove from the source, insert into the
/// target at the over-item's index or at the policy end.
fn move_across(
    partition: &Partition,
    source: &ContainerId,
    target: &ContainerId,
    active_id: &str,
    over_id: &str,
    policy: DropPolicy,
) -> Partition {
    let mut from_seq = partition
        .sequence(source.as_str())
        .cloned()
        .unwrap_or_default();

    let Some(from) = from_seq.iter().position(|item| item.as_str() == active_id) else {
        return partition.clone();
    };
    let item: ItemId = from_seq.remove(from);

    let mut to_seq: Vector<ItemId> = partition
        .sequence(target.as_str())
        .cloned()
        .unwrap_or_default();

    let to = to_seq
        .iter()
        .position(|other| other.as_str() == over_id)
        .unwrap_or(match policy {
            DropPolicy::Append => to_seq.len(),
            DropPolicy::Prepend => 0,
        });
    to_seq.insert(to, item);

    partition.with_replaced([(source.clone(), from_seq), (target.clone(), to_seq)])
}
