//! Movement domain: motor driver, freeze handling, and plane lock.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::one_shot_settings;
use crate::core::{PlayerLoseEvent, PlayerResetEvent, PlayerWinEvent, ToggleGamePopupEvent};
use crate::movement::{
    AnimationParams, DashEffects, DashSfx, Frozen, GroundSensor, MotorEvent, MotorFrame,
    MovementInput, MovementTuning, Player, PlayerMotor, PlayerSpawn, WallSight,
};

pub(crate) fn drive_player_motor(
    mut commands: Commands,
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    dash_sfx: Option<Res<DashSfx>>,
    mut popup_events: MessageWriter<ToggleGamePopupEvent>,
    mut query: Query<
        (
            &GroundSensor,
            &mut PlayerMotor,
            &mut WallSight,
            &mut DashEffects,
            &mut AnimationParams,
            &mut LinearVelocity,
        ),
        (With<Player>, Without<Frozen>),
    >,
) {
    let frame = MotorFrame {
        now: time.elapsed_secs(),
        dt: time.delta_secs(),
        grounded: false,
    };

    for (ground, mut motor, mut sight, mut effects, mut animation, mut velocity) in &mut query {
        let step = motor.step(
            &input,
            &tuning,
            MotorFrame {
                grounded: ground.grounded,
                ..frame
            },
        );

        for event in &step.events {
            match *event {
                MotorEvent::SightAimed(direction) => sight.update_direction(direction),
                MotorEvent::SightContact(touching) => sight.set_is_touching_wall(touching),
                MotorEvent::Sparks(on) => effects.sparks = on,
                MotorEvent::Dust(on) => effects.dust = on,
                MotorEvent::PopupToggled => {
                    popup_events.write(ToggleGamePopupEvent);
                }
                MotorEvent::DashSfx => {
                    if let Some(sfx) = &dash_sfx {
                        commands.spawn((
                            AudioPlayer::new(sfx.0.clone()),
                            one_shot_settings(tuning.dash_sfx_volume, tuning.dash_sfx_pitch),
                        ));
                    }
                }
            }
        }

        *animation = step.animation;

        // The body is moved by displacement; the physics step resolves contacts
        velocity.0 = if frame.dt > 0.0 {
            step.displacement / frame.dt
        } else {
            Vec2::ZERO
        };
    }
}

pub(crate) fn freeze_on_level_end(
    mut commands: Commands,
    mut win_events: MessageReader<PlayerWinEvent>,
    mut lose_events: MessageReader<PlayerLoseEvent>,
    mut query: Query<
        (
            Entity,
            &PlayerMotor,
            &mut AnimationParams,
            &mut DashEffects,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let won = win_events.read().count() > 0;
    let lost = lose_events.read().count() > 0;
    if !(won || lost) {
        return;
    }

    for (entity, motor, mut animation, mut effects, mut velocity) in &mut query {
        *animation = motor.freeze_animator_body();
        // No landing will follow, so both emitters stop here
        effects.sparks = false;
        effects.dust = false;
        velocity.0 = Vec2::ZERO;
        commands.entity(entity).insert(Frozen);
        info!("Player frozen: won={}, lost={}", won, lost);
    }
}

pub(crate) fn reset_player(
    mut commands: Commands,
    mut reset_events: MessageReader<PlayerResetEvent>,
    mut query: Query<
        (
            Entity,
            &PlayerSpawn,
            &mut PlayerMotor,
            &mut WallSight,
            &mut DashEffects,
            &mut AnimationParams,
            &mut Transform,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    if reset_events.read().count() == 0 {
        return;
    }

    for (
        entity,
        spawn,
        mut motor,
        mut sight,
        mut effects,
        mut animation,
        mut transform,
        mut velocity,
    ) in &mut query
    {
        *animation = motor.freeze_animator_body();
        *motor = PlayerMotor::default();
        *sight = WallSight::default();
        *effects = DashEffects::default();
        transform.translation = spawn.0.extend(0.0);
        velocity.0 = Vec2::ZERO;
        commands.entity(entity).remove::<Frozen>();
        info!("Player reset to {:?}", spawn.0);
    }
}

/// Keep the player on the gameplay plane after physics has moved it
pub(crate) fn lock_to_plane(mut query: Query<&mut Transform, With<Player>>) {
    for mut transform in &mut query {
        if transform.translation.z != 0.0 {
            transform.translation.z = 0.0;
        }
    }
}

pub(crate) const IDLE_TINT: Color = Color::srgb(0.9, 0.9, 0.9);
pub(crate) const RUN_TINT: Color = Color::srgb(0.95, 0.95, 0.75);
pub(crate) const AIR_TINT: Color = Color::srgb(0.75, 0.85, 1.0);

/// Placeholder pose until the player has sprite animations
pub(crate) fn animation_tint(params: &AnimationParams) -> Color {
    if params.jumping {
        AIR_TINT
    } else if params.speed > 0.0 {
        RUN_TINT
    } else {
        IDLE_TINT
    }
}

pub(crate) fn apply_animation_params(
    mut query: Query<(&AnimationParams, &mut Sprite), Changed<AnimationParams>>,
) {
    for (params, mut sprite) in &mut query {
        sprite.flip_x = params.facing.yaw_degrees() < 0.0;
        sprite.color = animation_tint(params);
    }
}
