//! Content domain: RON data definitions for gameplay configuration.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::audio::BgmTuning;
use crate::breakables::BreakableTuning;
use crate::movement::MovementTuning;

/// Top-level contents of `assets/data/gameplay.ron`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Level number; selects the music track
    pub level: i32,
    /// Seed for sound variation; random when absent
    pub sfx_seed: Option<u64>,
    pub movement: MovementTuning,
    pub breakables: BreakableTuning,
    pub bgm: BgmTuning,
    pub layout: LevelLayout,
}

/// Axis-aligned static block, given by center and size
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct BlockDef {
    pub center: (f32, f32),
    pub size: (f32, f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PropDef {
    pub position: (f32, f32),
    pub health: f32,
    pub value: i32,
}

/// Static geometry, props, and spawn point of the test level
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LevelLayout {
    pub player_spawn: (f32, f32),
    pub ground: Vec<BlockDef>,
    pub walls: Vec<BlockDef>,
    pub props: Vec<PropDef>,
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self {
            player_spawn: (-400.0, -200.0),
            ground: vec![BlockDef {
                center: (0.0, -300.0),
                size: (1400.0, 40.0),
            }],
            walls: vec![
                BlockDef {
                    center: (-680.0, 0.0),
                    size: (40.0, 640.0),
                },
                BlockDef {
                    center: (680.0, 0.0),
                    size: (40.0, 640.0),
                },
            ],
            props: vec![
                PropDef {
                    position: (0.0, -264.0),
                    health: 3.0,
                    value: 30,
                },
                PropDef {
                    position: (200.0, -264.0),
                    health: 1.0,
                    value: 10,
                },
            ],
        }
    }
}
