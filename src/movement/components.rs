//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Breakable props
    Breakable,
    /// Reward pickups
    Pickup,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Result of the downward ground probe, refreshed every frame
#[derive(Component, Debug, Default)]
pub struct GroundSensor {
    pub grounded: bool,
}

/// Player stops reading input while frozen (win/lose until reset)
#[derive(Component, Debug)]
pub struct Frozen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Model yaw in degrees: +90 faces right, -90 faces left
    pub fn yaw_degrees(self) -> f32 {
        match self {
            Facing::Right => 90.0,
            Facing::Left => -90.0,
        }
    }
}

/// Parameters pushed to the animation layer every frame
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationParams {
    pub speed: f32,
    pub jumping: bool,
    pub facing: Facing,
}

/// On/off state of the dash particle emitters
#[derive(Component, Debug, Default)]
pub struct DashEffects {
    pub sparks: bool,
    pub dust: bool,
    /// Seconds until the next particle spawn
    pub spawn_timer: f32,
}

/// Kind of a spawned dash particle
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashParticle {
    Spark,
    Dust,
}
