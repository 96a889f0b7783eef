//! Persistence integration tests.
//!
//! Snapshots come back from storage with no guarantees. These tests
//! exercise the full save/load loop and the normalization rules that
//! re-establish the catalog invariant on restore.

use tierboard::{
    Board, BoardConfig, MemoryStore, Partition, Snapshot, SnapshotStore, UNRANKED,
};

fn config() -> BoardConfig {
    BoardConfig::new()
        .with_tiers(["S", "A"])
        .with_items(["w", "x", "y", "z"])
}

fn items(partition: &Partition, container: &str) -> Vec<String> {
    partition
        .items(container)
        .map(|item| item.as_str().to_string())
        .collect()
}

// =============================================================================
// Round trips
// =============================================================================

/// A board saved and loaded through a store reproduces its layout.
#[test]
fn test_store_round_trip() {
    let mut board = Board::new(config());
    board.drag_end("x", Some("S"));
    board.drag_end("z", Some("x"));
    board.drag_end("y", Some("A"));

    let mut store = MemoryStore::new();
    board.save_to(&mut store, "anime-board").unwrap();

    let mut loaded = Board::new(config());
    assert!(loaded.load_from(&store, "anime-board").unwrap());

    assert_eq!(items(loaded.partition(), "S"), ["z", "x"]);
    assert_eq!(items(loaded.partition(), "A"), ["y"]);
    assert_eq!(items(loaded.partition(), UNRANKED), ["w"]);
}

/// The serialized form is the JSON object a key-value store expects.
#[test]
fn test_snapshot_wire_shape() {
    let mut board = Board::new(config());
    board.drag_end("y", Some("S"));

    let encoded = serde_json::to_string(&board.snapshot()).unwrap();
    let decoded: Snapshot = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, board.snapshot());
    assert_eq!(decoded.items("S"), ["y"]);
    assert_eq!(decoded.items(UNRANKED), ["w", "x", "z"]);
}

/// Loading a key that was never saved leaves the board untouched.
#[test]
fn test_load_missing_key() {
    let store = MemoryStore::new();
    let mut board = Board::new(config());
    let before = board.partition().clone();

    assert!(!board.load_from(&store, "nothing").unwrap());
    assert_eq!(*board.partition(), before);
}

// =============================================================================
// Restore normalization
// =============================================================================

/// An item the snapshot omitted everywhere reappears in the pool, once.
#[test]
fn test_restore_omitted_item_lands_in_unranked() {
    let mut snapshot = Snapshot::new();
    snapshot.set("S", ["x"]);
    snapshot.set(UNRANKED, ["y", "z"]);

    let mut board = Board::new(config());
    board.restore(&snapshot);

    let pool = items(board.partition(), UNRANKED);
    assert_eq!(pool.iter().filter(|id| *id == "w").count(), 1);
    assert_eq!(board.partition().item_count(), 4);
}

/// Identifiers from an older catalog are dropped, not resurrected.
#[test]
fn test_restore_drops_stale_ids() {
    let mut snapshot = Snapshot::new();
    snapshot.set("S", ["x", "retired-show"]);

    let mut board = Board::new(config());
    board.restore(&snapshot);

    assert_eq!(items(board.partition(), "S"), ["x"]);
    assert!(!board.partition().contains_item("retired-show"));
    assert_eq!(board.partition().item_count(), 4);
}

/// A hand-edited snapshot that lists an id twice keeps the first copy.
#[test]
fn test_restore_deduplicates() {
    let mut snapshot = Snapshot::new();
    snapshot.set("S", ["x", "y"]);
    snapshot.set("A", ["y", "x", "z"]);

    let mut board = Board::new(config());
    board.restore(&snapshot);

    assert_eq!(items(board.partition(), "S"), ["x", "y"]);
    assert_eq!(items(board.partition(), "A"), ["z"]);
    assert_eq!(board.partition().item_count(), 4);
}

/// Entries under container names from another configuration are dropped,
/// and their catalog items fall back to the pool.
#[test]
fn test_restore_ignores_unknown_containers() {
    let mut snapshot = Snapshot::new();
    snapshot.set("Legendary", ["x", "y"]);
    snapshot.set("S", ["z"]);

    let mut board = Board::new(config());
    board.restore(&snapshot);

    assert!(!board.partition().is_container("Legendary"));
    assert_eq!(items(board.partition(), "S"), ["z"]);
    assert_eq!(items(board.partition(), UNRANKED), ["w", "x", "y"]);
}

/// A snapshot from a wider tier set still restores cleanly after tiers
/// were removed: surviving tiers keep their order, the rest normalizes.
#[test]
fn test_restore_after_tier_removal() {
    let wide = BoardConfig::new()
        .with_tiers(["S", "A", "B"])
        .with_items(["w", "x", "y", "z"]);
    let mut board = Board::new(wide);
    board.drag_end("w", Some("B"));
    board.drag_end("x", Some("S"));
    let snapshot = board.snapshot();

    // Same catalog, but tier "B" no longer exists.
    let mut narrow = Board::new(config());
    narrow.restore(&snapshot);

    assert_eq!(items(narrow.partition(), "S"), ["x"]);
    assert_eq!(items(narrow.partition(), UNRANKED), ["y", "z", "w"]);
    assert_eq!(narrow.partition().item_count(), 4);
}

/// Storing through the trait object seam works like the concrete type.
#[test]
fn test_store_via_trait() {
    let mut store = MemoryStore::new();
    let board = Board::new(config());

    let dyn_store: &mut dyn SnapshotStore = &mut store;
    dyn_store.put("k", &board.snapshot()).unwrap();

    assert_eq!(dyn_store.get("k").unwrap(), Some(board.snapshot()));
}
