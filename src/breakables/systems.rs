//! Breakables domain: hit handling and the break sequence.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{EmitterSound, SfxRng, one_shot_settings, spawn_sound_emitter};
use crate::breakables::{
    Breakable, BreakableHitEvent, BreakableSounds, BreakableTuning, Gem, HitOutcome,
};
use crate::core::{RemovalQueue, ScoreUpdateEvent};
use crate::movement::GameLayer;

pub(crate) fn load_breakable_sounds(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    tuning: Res<BreakableTuning>,
) {
    commands.insert_resource(BreakableSounds {
        hit: asset_server.load(tuning.hit_sfx_path.clone()),
        final_break: asset_server.load(tuning.final_sfx_path.clone()),
        contents: asset_server.load(tuning.contents_sfx_path.clone()),
    });
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn handle_breakable_hits(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<BreakableTuning>,
    sounds: Res<BreakableSounds>,
    mut rng: ResMut<SfxRng>,
    mut removals: ResMut<RemovalQueue>,
    mut hit_events: MessageReader<BreakableHitEvent>,
    mut score_events: MessageWriter<ScoreUpdateEvent>,
    mut query: Query<(&Transform, &mut Breakable)>,
) {
    let now = time.elapsed_secs();

    for event in hit_events.read() {
        let Ok((transform, mut breakable)) = query.get_mut(event.target) else {
            continue;
        };
        let position = transform.translation.truncate();

        commands.spawn((
            AudioPlayer::new(sounds.hit.clone()),
            one_shot_settings(tuning.hit_sfx_volume, rng.jitter_pitch(tuning.hit_sfx_pitch)),
        ));

        match breakable.react_to_hit(event.damage) {
            HitOutcome::Damaged { remaining } => {
                debug!(
                    "Breakable {:?} hit for {}: health={}",
                    event.target, event.damage, remaining
                );
            }
            HitOutcome::Broken { score, rewards } => {
                score_events.write(ScoreUpdateEvent { amount: score });

                spawn_sound_emitter(
                    &mut commands,
                    &mut removals,
                    now,
                    position,
                    EmitterSound {
                        clip: sounds.contents.clone(),
                        volume: tuning.contents_sfx_volume,
                        pitch: 1.0,
                        length: tuning.contents_sfx_length,
                    },
                );
                spawn_sound_emitter(
                    &mut commands,
                    &mut removals,
                    now,
                    position,
                    EmitterSound {
                        clip: sounds.final_break.clone(),
                        volume: tuning.final_sfx_volume,
                        pitch: rng.jitter_pitch(tuning.final_sfx_pitch),
                        length: tuning.final_sfx_length,
                    },
                );

                for _ in 0..rewards {
                    spawn_gem(&mut commands, position, tuning.gem_radius);
                }

                // Despawn is deferred: further hits this frame still find the
                // prop and run the sequence again
                commands.entity(event.target).despawn();
                info!(
                    "Breakable {:?} broken: score={}, gems={}",
                    event.target, score, rewards
                );
            }
        }
    }
}

pub fn spawn_gem(commands: &mut Commands, position: Vec2, radius: f32) -> Entity {
    commands
        .spawn((
            Gem,
            Sprite {
                color: Color::srgb(0.3, 0.9, 0.8),
                custom_size: Some(Vec2::splat(radius * 2.0)),
                ..default()
            },
            Transform::from_translation(position.extend(0.2)),
            RigidBody::Dynamic,
            Collider::circle(radius),
            CollisionLayers::new(GameLayer::Pickup, [GameLayer::Ground, GameLayer::Wall]),
        ))
        .id()
}

pub fn spawn_breakable(commands: &mut Commands, position: Vec2, breakable: Breakable) -> Entity {
    let size = Vec2::splat(32.0);
    commands
        .spawn((
            breakable,
            Sprite {
                color: Color::srgb(0.6, 0.45, 0.3),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            CollisionLayers::new(GameLayer::Breakable, [GameLayer::Player]),
        ))
        .id()
}
