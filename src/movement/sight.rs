//! Movement domain: the wall sight that feeds wall-touch reports to the motor.

use bevy::prelude::*;

/// Horizontal wall probe attached to the player.
///
/// `touching` mirrors what the motor last accepted. While it is false the
/// sight keeps reporting hits, so a player who touches a wall while still
/// rising attaches as soon as they start falling.
#[derive(Component, Debug, Clone)]
pub struct WallSight {
    pub direction: f32,
    pub touching: bool,
}

impl Default for WallSight {
    fn default() -> Self {
        Self {
            direction: 1.0,
            touching: false,
        }
    }
}

impl WallSight {
    pub fn update_direction(&mut self, direction: f32) {
        self.direction = direction;
        self.touching = false;
    }

    pub fn set_is_touching_wall(&mut self, touching: bool) {
        self.touching = touching;
    }

    /// Fold in this frame's ray result; returns the report to send to the
    /// motor, if any.
    pub fn observe(&mut self, ray_hit: bool) -> Option<bool> {
        match (ray_hit, self.touching) {
            (true, false) => Some(true),
            (false, true) => {
                self.touching = false;
                Some(false)
            }
            _ => None,
        }
    }
}
