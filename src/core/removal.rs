//! Core domain: scheduled despawning of short-lived entities.
//!
//! Sound emitters and particles register here with an absolute expiry time
//! (seconds since startup). `despawn_expired` removes whatever is due.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use bevy::prelude::*;

#[derive(Debug, Clone, Copy)]
struct ScheduledRemoval {
    expires_at: f32,
    entity: Entity,
}

impl PartialEq for ScheduledRemoval {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScheduledRemoval {}

impl PartialOrd for ScheduledRemoval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledRemoval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.expires_at
            .total_cmp(&other.expires_at)
            .then_with(|| self.entity.cmp(&other.entity))
    }
}

/// Min-heap of entities keyed by expiry time
#[derive(Resource, Debug, Default)]
pub struct RemovalQueue {
    heap: BinaryHeap<Reverse<ScheduledRemoval>>,
}

impl RemovalQueue {
    /// Schedule `entity` for removal at `expires_at`
    pub fn schedule(&mut self, entity: Entity, expires_at: f32) {
        self.heap.push(Reverse(ScheduledRemoval { expires_at, entity }));
    }

    /// Pop every entity whose expiry is at or before `now`, earliest first
    pub fn drain_expired(&mut self, now: f32) -> Vec<Entity> {
        let mut expired = Vec::new();
        while let Some(Reverse(next)) = self.heap.peek() {
            if next.expires_at > now {
                break;
            }
            expired.push(next.entity);
            self.heap.pop();
        }
        expired
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

pub(crate) fn despawn_expired(
    mut commands: Commands,
    time: Res<Time>,
    mut queue: ResMut<RemovalQueue>,
) {
    for entity in queue.drain_expired(time.elapsed_secs()) {
        // The entity may already be gone (level reset, parent despawn)
        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.despawn();
        }
    }
}
