//! Debug keys for fast iteration (dev-tools feature).
//!
//! - F1 / F2 / F3: fire win / lose / reset
//! - H: hit every breakable within reach of the player
//! - F5: log motor, score, and music state

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::BgmState;
use crate::breakables::{Breakable, BreakableHitEvent};
use crate::core::{PlayerLoseEvent, PlayerResetEvent, PlayerWinEvent, Score};
use crate::movement::{Player, PlayerMotor};

/// Distance at which the debug hit key reaches a prop
const DEBUG_HIT_REACH: f32 = 64.0;
const DEBUG_HIT_DAMAGE: f32 = 1.0;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (debug_game_flow_keys, debug_hit_nearby, debug_log_state),
        );
    }
}

fn debug_game_flow_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut win_events: MessageWriter<PlayerWinEvent>,
    mut lose_events: MessageWriter<PlayerLoseEvent>,
    mut reset_events: MessageWriter<PlayerResetEvent>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        info!("[Debug] Win triggered");
        win_events.write(PlayerWinEvent);
    }
    if keyboard.just_pressed(KeyCode::F2) {
        info!("[Debug] Lose triggered");
        lose_events.write(PlayerLoseEvent);
    }
    if keyboard.just_pressed(KeyCode::F3) {
        info!("[Debug] Reset triggered");
        reset_events.write(PlayerResetEvent);
    }
}

fn debug_hit_nearby(
    keyboard: Res<ButtonInput<KeyCode>>,
    player_query: Query<&Transform, With<Player>>,
    breakables: Query<(Entity, &Transform), With<Breakable>>,
    mut hit_events: MessageWriter<BreakableHitEvent>,
) {
    if !keyboard.just_pressed(KeyCode::KeyH) {
        return;
    }

    for player in &player_query {
        let origin = player.translation.truncate();
        for (entity, transform) in &breakables {
            if transform.translation.truncate().distance(origin) <= DEBUG_HIT_REACH {
                hit_events.write(BreakableHitEvent {
                    target: entity,
                    damage: DEBUG_HIT_DAMAGE,
                });
            }
        }
    }
}

fn debug_log_state(
    keyboard: Res<ButtonInput<KeyCode>>,
    motors: Query<&PlayerMotor, With<Player>>,
    score: Res<Score>,
    bgm: Res<BgmState>,
) {
    if !keyboard.just_pressed(KeyCode::F5) {
        return;
    }

    for motor in &motors {
        info!(
            "[Debug] motor: grounded={} dashing={} dash_jumping={} wall_attached={} \
             wall_jumping={} velocity={:?}",
            motor.grounded,
            motor.dashing,
            motor.dash_jumping,
            motor.wall_attached,
            motor.wall_jumping,
            motor.velocity
        );
    }
    info!(
        "[Debug] score={} breaks={} bgm_track={:?} volume={:.2} fading={}",
        score.total,
        score.breaks,
        bgm.current_track,
        bgm.volume,
        bgm.is_fading()
    );
}
