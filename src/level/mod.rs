//! Level domain: camera and test level built from the configured layout.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::breakables::{Breakable, Gem, spawn_breakable};
use crate::content::{BlockDef, LevelLayout};
use crate::core::PlayerResetEvent;
use crate::movement::{GameLayer, Ground, Wall, spawn_player};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelLayout>()
            .add_systems(Startup, (setup_camera, spawn_level))
            .add_systems(Update, respawn_props_on_reset);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn block_sprite(block: &BlockDef, color: Color) -> (Sprite, Transform, Collider) {
    let size = Vec2::new(block.size.0, block.size.1);
    (
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(block.center.0, block.center.1, 0.0),
        Collider::rectangle(size.x, size.y),
    )
}

fn spawn_level(mut commands: Commands, layout: Res<LevelLayout>) {
    for block in &layout.ground {
        commands.spawn((
            Ground,
            block_sprite(block, Color::srgb(0.3, 0.3, 0.35)),
            RigidBody::Static,
            CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Pickup]),
        ));
    }

    for block in &layout.walls {
        commands.spawn((
            Wall,
            block_sprite(block, Color::srgb(0.25, 0.25, 0.3)),
            RigidBody::Static,
            CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Pickup]),
        ));
    }

    spawn_props(&mut commands, &layout);

    let spawn = Vec2::new(layout.player_spawn.0, layout.player_spawn.1);
    spawn_player(&mut commands, spawn);

    info!(
        "Level spawned: ground={}, walls={}, props={}",
        layout.ground.len(),
        layout.walls.len(),
        layout.props.len()
    );
}

fn spawn_props(commands: &mut Commands, layout: &LevelLayout) {
    for prop in &layout.props {
        spawn_breakable(
            commands,
            Vec2::new(prop.position.0, prop.position.1),
            Breakable::new(prop.health, prop.value),
        );
    }
}

/// Restore every prop and clear dropped gems when the level restarts
fn respawn_props_on_reset(
    mut commands: Commands,
    mut reset_events: MessageReader<PlayerResetEvent>,
    layout: Res<LevelLayout>,
    leftovers: Query<Entity, Or<(With<Breakable>, With<Gem>)>>,
) {
    if reset_events.read().count() == 0 {
        return;
    }

    for entity in &leftovers {
        commands.entity(entity).despawn();
    }
    spawn_props(&mut commands, &layout);
}
