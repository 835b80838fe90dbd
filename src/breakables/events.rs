//! Breakables domain: hit messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A hit landed on a breakable prop
#[derive(Debug)]
pub struct BreakableHitEvent {
    pub target: Entity,
    pub damage: f32,
}

impl Message for BreakableHitEvent {}
