//! Core domain: tests for score tracking and scheduled removal.

use bevy::prelude::World;

use super::{GamePopup, RemovalQueue, Score};

// -----------------------------------------------------------------------------
// Score / popup tests
// -----------------------------------------------------------------------------

#[test]
fn test_score_accumulates_and_resets() {
    let mut score = Score::default();
    score.add(30);
    score.add(15);
    assert_eq!(score.total, 45);
    assert_eq!(score.breaks, 2);

    score.reset();
    assert_eq!(score.total, 0);
    assert_eq!(score.breaks, 0);
}

#[test]
fn test_popup_toggles() {
    let mut popup = GamePopup::default();
    popup.toggle();
    assert!(popup.visible);
    popup.toggle();
    assert!(!popup.visible);
}

// -----------------------------------------------------------------------------
// RemovalQueue tests
// -----------------------------------------------------------------------------

#[test]
fn test_removal_queue_drains_in_expiry_order() {
    let mut world = World::new();
    let late = world.spawn_empty().id();
    let early = world.spawn_empty().id();
    let middle = world.spawn_empty().id();

    let mut queue = RemovalQueue::default();
    queue.schedule(late, 3.0);
    queue.schedule(early, 1.0);
    queue.schedule(middle, 2.0);

    assert!(queue.drain_expired(0.5).is_empty());
    assert_eq!(queue.drain_expired(2.0), vec![early, middle]);
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.drain_expired(10.0), vec![late]);
    assert!(queue.is_empty());
}

#[test]
fn test_removal_queue_expiry_is_inclusive() {
    let mut world = World::new();
    let entity = world.spawn_empty().id();

    let mut queue = RemovalQueue::default();
    queue.schedule(entity, 1.25);
    assert_eq!(queue.drain_expired(1.25), vec![entity]);
}
