//! Integration tests for entity storage and id recycling.

use corral_foundation::EntityId;
use corral_storage::{EntityPool, IdGuard};

// =============================================================================
// Entity Pool
// =============================================================================

#[test]
fn entities_get_ascending_ids_starting_at_one() {
    let mut pool = EntityPool::new(8);
    let ids: Vec<_> = (0..3).map(|_| pool.create()).collect();
    assert_eq!(
        ids,
        vec![EntityId::new(1), EntityId::new(2), EntityId::new(3)]
    );
}

#[test]
fn every_live_entity_is_reachable_after_churn() {
    let mut pool = EntityPool::new(8);
    let ids: Vec<_> = (0..6).map(|_| pool.create()).collect();

    assert!(pool.remove(ids[0]));
    assert!(pool.remove(ids[3]));

    for (position, &id) in ids.iter().enumerate() {
        let expect_live = position != 0 && position != 3;
        assert_eq!(pool.contains(id), expect_live);
        assert_eq!(pool.get(id).is_ok(), expect_live);
    }
    assert_eq!(pool.len(), 4);
}

#[test]
fn removed_ids_are_reissued_smallest_first() {
    let mut pool = EntityPool::new(8);
    let ids: Vec<_> = (0..4).map(|_| pool.create()).collect();

    pool.remove(ids[2]);
    pool.remove(ids[0]);

    assert_eq!(pool.create(), ids[0]);
    assert_eq!(pool.create(), ids[2]);
    assert_eq!(pool.create(), EntityId::new(5));
}

#[test]
fn double_remove_is_reported_not_fatal() {
    let mut pool = EntityPool::new(4);
    let id = pool.create();

    assert!(pool.remove(id));
    assert!(!pool.remove(id));
}

#[test]
fn clear_releases_everything_including_ids() {
    let mut pool = EntityPool::new(4);
    pool.create();
    pool.create();

    pool.clear();

    assert!(pool.is_empty());
    assert!(!pool.contains(EntityId::new(1)));
    assert_eq!(pool.create(), EntityId::new(1));
}

// =============================================================================
// Id Guard
// =============================================================================

#[test]
fn guard_overflow_is_terminal_until_reset() {
    let mut guard = IdGuard::new(2);
    let first = guard.next_id();
    let second = guard.next_id();
    assert_eq!(guard.next_id(), EntityId::UNDEFINED);

    // Freeing ids after overflow does not revive the guard.
    guard.free_id(first);
    guard.free_id(second);
    assert_eq!(guard.next_id(), EntityId::UNDEFINED);
    assert!(guard.is_overflowed());

    guard.reset();
    assert_eq!(guard.next_id(), first);
}

#[test]
fn guard_ids_stay_distinct_across_recycling() {
    let mut guard = IdGuard::new(16);
    let mut live = Vec::new();
    for _ in 0..16 {
        live.push(guard.next_id());
    }

    // Release every other id, then take them back.
    let released: Vec<_> = live.iter().step_by(2).copied().collect();
    for &id in &released {
        guard.free_id(id);
        live.retain(|&l| l != id);
    }
    for _ in &released {
        let id = guard.next_id();
        assert!(!id.is_undefined());
        assert!(!live.contains(&id));
        live.push(id);
    }

    live.sort_unstable();
    live.dedup();
    assert_eq!(live.len(), 16);
}
