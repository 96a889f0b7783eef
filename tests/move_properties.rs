//! Property tests for the move operator.
//!
//! The invariant everything rests on: for any sequence of drops - valid,
//! degenerate, or aimed at nothing - every catalog item stays in exactly
//! one container.

use std::collections::HashSet;

use proptest::prelude::*;

use tierboard::{apply_move, BoardConfig, DropPolicy, Partition, UNRANKED};

const ITEM_COUNT: usize = 12;
const TIERS: [&str; 3] = ["s-tier", "a-tier", "b-tier"];

/// Target choices cover every drop kind: an item, a tier body, the pool
/// body, and an identifier that resolves to nothing.
const TARGET_CHOICES: usize = ITEM_COUNT + TIERS.len() + 2;

fn test_config() -> BoardConfig {
    BoardConfig::new()
        .with_tiers(TIERS)
        .with_items((0..ITEM_COUNT).map(|i| format!("item-{i}")))
}

fn item_id(index: usize) -> String {
    format!("item-{index}")
}

fn target_id(choice: usize) -> String {
    if choice < ITEM_COUNT {
        item_id(choice)
    } else if choice < ITEM_COUNT + TIERS.len() {
        TIERS[choice - ITEM_COUNT].to_string()
    } else if choice == ITEM_COUNT + TIERS.len() {
        UNRANKED.to_string()
    } else {
        "no-such-target".to_string()
    }
}

/// Every catalog item exactly once, nothing else anywhere.
fn assert_catalog_partition(partition: &Partition) {
    let mut seen: HashSet<String> = HashSet::new();
    let mut total = 0;
    for container in partition.containers() {
        for item in partition.items(container.as_str()) {
            total += 1;
            assert!(
                seen.insert(item.as_str().to_string()),
                "{item} appears in more than one place"
            );
        }
    }
    assert_eq!(total, ITEM_COUNT, "item lost or invented");
}

proptest! {
    /// Arbitrary drop sequences never lose, duplicate, or invent items,
    /// under either container-body placement policy.
    #[test]
    fn moves_preserve_the_catalog_partition(
        moves in prop::collection::vec((0..ITEM_COUNT, 0..TARGET_CHOICES), 0..48),
        prepend in any::<bool>(),
    ) {
        let policy = if prepend { DropPolicy::Prepend } else { DropPolicy::Append };
        let config = test_config();
        let mut partition = Partition::initial(&config);

        for (active, target) in moves {
            partition = apply_move(&partition, &item_id(active), &target_id(target), policy);
            assert_catalog_partition(&partition);
        }
    }

    /// Dropping any item onto itself is a no-op from any reachable state.
    #[test]
    fn drop_onto_self_is_identity(
        setup in prop::collection::vec((0..ITEM_COUNT, 0..TARGET_CHOICES), 0..16),
        active in 0..ITEM_COUNT,
    ) {
        let config = test_config();
        let mut partition = Partition::initial(&config);
        for (a, t) in setup {
            partition = apply_move(&partition, &item_id(a), &target_id(t), DropPolicy::Append);
        }

        let id = item_id(active);
        let next = apply_move(&partition, &id, &id, DropPolicy::Append);
        prop_assert_eq!(next, partition);
    }

    /// A target that resolves to nothing leaves any reachable state
    /// untouched.
    #[test]
    fn unresolved_target_is_identity(
        setup in prop::collection::vec((0..ITEM_COUNT, 0..TARGET_CHOICES), 0..16),
        active in 0..ITEM_COUNT,
    ) {
        let config = test_config();
        let mut partition = Partition::initial(&config);
        for (a, t) in setup {
            partition = apply_move(&partition, &item_id(a), &target_id(t), DropPolicy::Append);
        }

        let next = apply_move(&partition, &item_id(active), "no-such-target", DropPolicy::Append);
        prop_assert_eq!(next, partition);
    }

    /// Moving an item onto a container body puts it at that container's
    /// policy end and leaves every other container untouched.
    #[test]
    fn container_drop_lands_at_policy_end(
        active in 0..ITEM_COUNT,
        tier in 0..TIERS.len(),
        prepend in any::<bool>(),
    ) {
        let policy = if prepend { DropPolicy::Prepend } else { DropPolicy::Append };
        let config = test_config();
        let partition = Partition::initial(&config);

        let id = item_id(active);
        let next = apply_move(&partition, &id, TIERS[tier], policy);

        prop_assert_eq!(next.locate(&id).map(|c| c.as_str()), Some(TIERS[tier]));
        prop_assert_eq!(next.container_len(TIERS[tier]), 1);
        prop_assert_eq!(next.container_len(UNRANKED), ITEM_COUNT - 1);
        assert_catalog_partition(&next);
    }
}
