//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub gravity: f32,
    pub move_speed: f32,
    pub jump_strength: f32,
    /// Upward velocity is divided by this when jump is released early
    pub jump_cancel_force: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    pub wall_slide_speed: f32,
    /// Length of the wall-jump push-off window
    pub wall_jump_cooldown: f32,
    pub wall_jump_strength_scale: f32,
    pub wall_jump_gravity_scale: f32,
    /// Horizontal speed the push-off decays to by the end of the window
    pub wall_jump_end_speed: f32,
    /// Extra speed while wall-jumping after the push-off window
    pub wall_jump_boost: f32,
    /// Downward velocity held while standing on ground
    pub grounded_stick_speed: f32,
    pub dash_sfx_path: String,
    pub dash_sfx_pitch: f32,
    pub dash_sfx_volume: f32,
    pub dash_dust_height_offset: f32,
    /// Ray length used by the wall sight beyond the body half-width
    pub sight_reach: f32,
    pub ground_probe_distance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            gravity: 1800.0,
            move_speed: 320.0,
            jump_strength: 130.0,
            jump_cancel_force: 2.0,
            dash_speed: 900.0,
            dash_duration: 0.2,
            dash_cooldown: 0.5,
            wall_slide_speed: 100.0,
            wall_jump_cooldown: 0.25,
            wall_jump_strength_scale: 0.5,
            wall_jump_gravity_scale: 1.5,
            wall_jump_end_speed: 2.0,
            wall_jump_boost: 5.0,
            grounded_stick_speed: 2.0,
            dash_sfx_path: "audio/sfx/dash.ogg".to_string(),
            dash_sfx_pitch: 1.0,
            dash_sfx_volume: 0.6,
            dash_dust_height_offset: -22.0,
            sight_reach: 4.0,
            ground_probe_distance: 4.0,
        }
    }
}

impl MovementTuning {
    /// Launch velocity reaching `jump_strength` height: v = sqrt(2 * h * g)
    pub fn jump_velocity(&self) -> f32 {
        (2.0 * self.jump_strength * self.gravity).sqrt()
    }

    /// Launch velocity of a wall-jump, using the scaled height and gravity
    pub fn wall_jump_velocity(&self) -> f32 {
        (2.0
            * (self.jump_strength * self.wall_jump_strength_scale)
            * (self.gravity * self.wall_jump_gravity_scale))
            .sqrt()
    }
}

#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub dash_just_pressed: bool,
    pub dash_just_released: bool,
    pub popup_just_pressed: bool,
}
