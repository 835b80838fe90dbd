//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod effects;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{detect_ground, ground_probe_filter, probe_walls};
pub(crate) use effects::emit_dash_particles;
pub(crate) use input::read_input;
pub(crate) use movement::{
    AIR_TINT, IDLE_TINT, RUN_TINT, animation_tint, apply_animation_params, drive_player_motor,
    freeze_on_level_end, lock_to_plane, reset_player,
};
