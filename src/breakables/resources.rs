//! Breakables domain: tuning and loaded clips.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BreakableTuning {
    pub hit_sfx_path: String,
    pub hit_sfx_pitch: f32,
    pub hit_sfx_volume: f32,
    pub final_sfx_path: String,
    pub final_sfx_pitch: f32,
    pub final_sfx_volume: f32,
    pub final_sfx_length: f32,
    pub contents_sfx_path: String,
    pub contents_sfx_volume: f32,
    pub contents_sfx_length: f32,
    pub gem_radius: f32,
}

impl Default for BreakableTuning {
    fn default() -> Self {
        Self {
            hit_sfx_path: "audio/sfx/breakable_hit.ogg".to_string(),
            hit_sfx_pitch: 1.0,
            hit_sfx_volume: 0.7,
            final_sfx_path: "audio/sfx/breakable_final.ogg".to_string(),
            final_sfx_pitch: 1.0,
            final_sfx_volume: 0.8,
            final_sfx_length: 1.2,
            contents_sfx_path: "audio/sfx/breakable_contents.ogg".to_string(),
            contents_sfx_volume: 0.6,
            contents_sfx_length: 0.9,
            gem_radius: 6.0,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct BreakableSounds {
    pub hit: Handle<AudioSource>,
    pub final_break: Handle<AudioSource>,
    pub contents: Handle<AudioSource>,
}
