//! Movement domain: player motor, wall sight, and locomotion systems.

mod components;
mod motor;
mod resources;
mod sight;
mod systems;

pub use components::{
    AnimationParams, DashEffects, DashParticle, Facing, Frozen, GameLayer, Ground, GroundSensor,
    Player, Wall,
};
pub use motor::{MotorEvent, MotorFrame, MotorStep, PlayerMotor, WallContactReply, axis_sign};
pub use resources::{MovementInput, MovementTuning};
pub use sight::WallSight;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::systems::{
    IDLE_TINT, apply_animation_params, detect_ground, drive_player_motor, emit_dash_particles,
    freeze_on_level_end, lock_to_plane, probe_walls, read_input, reset_player,
};

pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Where the player returns to on reset
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerSpawn(pub Vec2);

/// Dash sound clip, loaded at startup
#[derive(Resource, Debug, Clone)]
pub struct DashSfx(pub Handle<AudioSource>);

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, load_dash_sfx)
            .add_systems(
                Update,
                (
                    read_input,
                    detect_ground,
                    reset_player,
                    freeze_on_level_end,
                    drive_player_motor,
                    probe_walls,
                    emit_dash_particles,
                    apply_animation_params,
                )
                    .chain(),
            )
            .add_systems(PostUpdate, lock_to_plane);
    }
}

fn load_dash_sfx(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    tuning: Res<MovementTuning>,
) {
    let handle: Handle<AudioSource> = asset_server.load(tuning.dash_sfx_path.clone());
    commands.insert_resource(DashSfx(handle));
}

/// Spawn the player with motor, sight, and a manually driven dynamic body.
pub fn spawn_player(commands: &mut Commands, position: Vec2) -> Entity {
    commands
        .spawn((
            // Identity & Movement
            (
                Player,
                PlayerSpawn(position),
                PlayerMotor::default(),
                WallSight::default(),
                GroundSensor::default(),
                DashEffects::default(),
                AnimationParams::default(),
            ),
            // Rendering
            Sprite {
                color: IDLE_TINT,
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0), // Gravity is integrated by the motor
                Friction::new(0.0),
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Ground, GameLayer::Wall, GameLayer::Breakable],
                ),
            ),
        ))
        .id()
}
