//! Breakables domain: breakable props and reward pickups.

use bevy::prelude::*;

/// Score points per spawned gem
pub const POINTS_PER_GEM: i32 = 10;

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Breakable {
    pub health: f32,
    /// Score awarded when broken
    pub value: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitOutcome {
    Damaged { remaining: f32 },
    Broken { score: i32, rewards: u32 },
}

impl Breakable {
    pub fn new(health: f32, value: i32) -> Self {
        Self { health, value }
    }

    /// Apply `damage` and report whether the prop broke. There is no guard
    /// against hitting an already broken prop: every hit at or below zero
    /// health reports `Broken` again.
    pub fn react_to_hit(&mut self, damage: f32) -> HitOutcome {
        self.health -= damage;

        if self.health <= 0.0 {
            HitOutcome::Broken {
                score: self.value,
                rewards: reward_count(self.value),
            }
        } else {
            HitOutcome::Damaged {
                remaining: self.health,
            }
        }
    }
}

/// Gems dropped for a score value: value / 10, truncated, none for value <= 0
pub fn reward_count(value: i32) -> u32 {
    u32::try_from(value / POINTS_PER_GEM).unwrap_or(0)
}

/// Reward pickup dropped by a broken prop
#[derive(Component, Debug)]
pub struct Gem;
