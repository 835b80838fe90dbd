//! Movement domain: ground and wall probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    DashEffects, GameLayer, GroundSensor, MovementTuning, Player, PlayerMotor, WallSight,
};

fn half_extents(collider: &Collider) -> Vec2 {
    match collider.shape_scaled().as_cuboid() {
        Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
        None => Vec2::new(12.0, 24.0),
    }
}

/// Everything the player can stand on: level ground and props
pub(crate) fn ground_probe_filter() -> SpatialQueryFilter {
    SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Breakable])
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &Collider, &mut GroundSensor), With<Player>>,
) {
    let ground_filter = ground_probe_filter();

    for (transform, collider, mut sensor) in &mut query {
        let was_grounded = sensor.grounded;

        // Cast a short ray downward from the player's feet
        let ray_origin =
            transform.translation.truncate() - Vec2::new(0.0, half_extents(collider).y);

        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            tuning.ground_probe_distance,
            true,
            &ground_filter,
        );

        sensor.grounded = hit.is_some();

        if sensor.grounded != was_grounded {
            debug!("Grounded changed: grounded={}", sensor.grounded);
        }
    }
}

/// Wall sight probe. Runs after the motor step so attachment takes effect on
/// the next frame, the same as a collision callback would.
pub(crate) fn probe_walls(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &Transform,
            &Collider,
            &GroundSensor,
            &mut WallSight,
            &mut PlayerMotor,
            &mut DashEffects,
        ),
        With<Player>,
    >,
) {
    // Filter to only hit Wall layer entities
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (transform, collider, ground, mut sight, mut motor, mut effects) in &mut query {
        let direction = if sight.direction < 0.0 {
            Dir2::NEG_X
        } else {
            Dir2::X
        };

        let hit = spatial_query
            .cast_ray(
                transform.translation.truncate(),
                direction,
                half_extents(collider).x + tuning.sight_reach,
                true,
                &wall_filter,
            )
            .is_some();

        if let Some(touching) = sight.observe(hit) {
            let reply = motor.set_is_touching_wall(touching, ground.grounded);
            sight.set_is_touching_wall(reply.attached);
            if reply.stop_dust {
                effects.dust = false;
            }
        }
    }
}
