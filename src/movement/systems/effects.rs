//! Movement domain: dash spark and dust particles.

use bevy::prelude::*;
use rand::Rng;

use crate::core::RemovalQueue;
use crate::movement::{DashEffects, DashParticle, MovementTuning, Player};

const PARTICLE_INTERVAL: f32 = 0.03;
const SPARK_LIFETIME: f32 = 0.12;
const DUST_LIFETIME: f32 = 0.35;

pub(crate) fn emit_dash_particles(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut removals: ResMut<RemovalQueue>,
    mut query: Query<(&Transform, &mut DashEffects), With<Player>>,
) {
    let dt = time.delta_secs();
    let now = time.elapsed_secs();
    let mut rng = rand::rng();

    for (transform, mut effects) in &mut query {
        if !(effects.sparks || effects.dust) {
            effects.spawn_timer = 0.0;
            continue;
        }

        effects.spawn_timer -= dt;
        if effects.spawn_timer > 0.0 {
            continue;
        }
        effects.spawn_timer = PARTICLE_INTERVAL;

        let origin = transform.translation.truncate();

        if effects.sparks {
            let jitter = Vec2::new(rng.random_range(-8.0..8.0), rng.random_range(-12.0..12.0));
            let spark = commands
                .spawn((
                    DashParticle::Spark,
                    Sprite {
                        color: Color::srgb(1.0, 0.85, 0.3),
                        custom_size: Some(Vec2::splat(3.0)),
                        ..default()
                    },
                    Transform::from_translation((origin + jitter).extend(0.5)),
                ))
                .id();
            removals.schedule(spark, now + SPARK_LIFETIME);
        }

        if effects.dust {
            let offset = Vec2::new(
                rng.random_range(-10.0..10.0),
                tuning.dash_dust_height_offset,
            );
            let dust = commands
                .spawn((
                    DashParticle::Dust,
                    Sprite {
                        color: Color::srgba(0.7, 0.65, 0.55, 0.6),
                        custom_size: Some(Vec2::splat(6.0)),
                        ..default()
                    },
                    Transform::from_translation((origin + offset).extend(-0.5)),
                ))
                .id();
            removals.schedule(dust, now + DUST_LIFETIME);
        }
    }
}
