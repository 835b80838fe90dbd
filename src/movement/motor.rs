//! Movement domain: the player motor state machine.
//!
//! `PlayerMotor::step` runs once per frame and returns the body displacement,
//! the side effects for collaborators (sight, particles, audio), and the
//! animation parameters. It never touches the ECS, so every rule here can be
//! driven directly from tests.
//!
//! Horizontal motion has a single owner per frame, decided by branch order:
//! dash-jump, wall-jump push-off, boosted wall-jump, then normal running
//! (skipped while dashing, since the dash moves the body itself).

use bevy::prelude::*;

use crate::movement::components::{AnimationParams, Facing};
use crate::movement::resources::{MovementInput, MovementTuning};

/// Per-frame context supplied by the physics layer
#[derive(Debug, Clone, Copy)]
pub struct MotorFrame {
    /// Seconds since startup
    pub now: f32,
    pub dt: f32,
    pub grounded: bool,
}

/// Side effects requested by a motor step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotorEvent {
    /// Point the wall sight along this horizontal direction
    SightAimed(f32),
    /// Tell the wall sight whether the player is still attached
    SightContact(bool),
    DashSfx,
    Sparks(bool),
    Dust(bool),
    PopupToggled,
}

#[derive(Debug, Default)]
pub struct MotorStep {
    pub displacement: Vec2,
    pub events: Vec<MotorEvent>,
    pub animation: AnimationParams,
}

/// Answer to a wall-touch report from the sight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallContactReply {
    pub attached: bool,
    /// A dash-jump was cut short by the wall, so its dust should stop
    pub stop_dust: bool,
}

#[derive(Component, Debug, Clone)]
pub struct PlayerMotor {
    pub grounded: bool,
    pub dashing: bool,
    pub dash_jumping: bool,
    pub wall_attached: bool,
    pub wall_jumping: bool,
    pub can_cancel_jump: bool,
    pub cancelled_wall_jump: bool,
    /// Absolute time at which the current dash ends
    pub dash_time: f32,
    pub last_dash_time: f32,
    /// Absolute time at which the wall-jump push-off window ends
    pub wall_jump_time: f32,
    pub velocity: Vec2,
    /// Horizontal input this frame, in {-1, 0, 1}
    pub movement: f32,
    /// Last nonzero horizontal input
    pub last_movement: f32,
    pub dash_direction: f32,
    pub wall_jump_direction: f32,
    pub facing: Facing,
}

impl Default for PlayerMotor {
    fn default() -> Self {
        Self {
            grounded: true,
            dashing: false,
            dash_jumping: false,
            wall_attached: false,
            wall_jumping: false,
            can_cancel_jump: false,
            cancelled_wall_jump: true,
            dash_time: 0.0,
            last_dash_time: 0.0,
            wall_jump_time: 0.0,
            velocity: Vec2::ZERO,
            movement: 0.0,
            last_movement: 0.0,
            dash_direction: 0.0,
            wall_jump_direction: 0.0,
            facing: Facing::Right,
        }
    }
}

/// Collapse an analog axis to {-1, 0, 1}
pub fn axis_sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl PlayerMotor {
    pub fn step(
        &mut self,
        input: &MovementInput,
        tuning: &MovementTuning,
        frame: MotorFrame,
    ) -> MotorStep {
        let mut out = MotorStep::default();

        self.update_grounded(frame.grounded, &mut out);
        self.movement = axis_sign(input.axis.x);
        self.update_wall_attachment(&mut out);
        self.update_direction(&mut out);

        if input.popup_just_pressed {
            out.events.push(MotorEvent::PopupToggled);
        }

        self.handle_jump(input, tuning, frame.now, &mut out);
        self.handle_dash(input, tuning, frame.now, &mut out);
        self.handle_wall_jump(input, tuning, frame.now, &mut out);
        self.apply_horizontal(tuning, frame, &mut out);
        self.apply_vertical(tuning, frame, &mut out);

        out.animation = self.animation();
        out
    }

    fn update_grounded(&mut self, grounded: bool, out: &mut MotorStep) {
        self.grounded = grounded;

        if self.grounded && self.dash_jumping {
            self.dash_jumping = false;
            out.events.push(MotorEvent::Dust(false));
        }

        if self.grounded && self.wall_jumping {
            self.wall_jumping = false;
        }
    }

    fn update_wall_attachment(&mut self, out: &mut MotorStep) {
        if !self.wall_attached {
            return;
        }

        let reversed = self.movement != 0.0 && self.movement == -self.last_movement;
        if self.grounded || self.movement == 0.0 || reversed {
            self.wall_attached = false;
            out.events.push(MotorEvent::SightContact(false));
            debug!(
                "Detached from wall: grounded={}, movement={}",
                self.grounded, self.movement
            );
        }
    }

    fn update_direction(&mut self, out: &mut MotorStep) {
        if self.movement != 0.0 && self.last_movement == -self.movement {
            out.events.push(MotorEvent::SightAimed(self.movement));
            self.cancelled_wall_jump = true;
        }

        if self.movement != 0.0 {
            self.last_movement = self.movement;
        }
    }

    fn handle_jump(
        &mut self,
        input: &MovementInput,
        tuning: &MovementTuning,
        now: f32,
        out: &mut MotorStep,
    ) {
        if self.grounded && input.jump_just_pressed {
            self.velocity.y = tuning.jump_velocity();
            self.can_cancel_jump = true;
        }

        // Past the apex the release window is gone
        if self.can_cancel_jump && self.velocity.y < 0.0 {
            self.can_cancel_jump = false;
            self.wall_jumping = false;
        }

        if !self.grounded && self.can_cancel_jump && input.jump_just_released {
            self.velocity.y *= 1.0 / tuning.jump_cancel_force;
            self.can_cancel_jump = false;
            self.wall_jumping = false;
        }

        if self.dashing {
            if self.grounded && input.jump_just_pressed {
                self.dashing = false;
                self.dash_jumping = true;
                out.events.push(MotorEvent::Sparks(false));
                self.velocity.y = tuning.jump_velocity();
                self.can_cancel_jump = true;
                debug!("Dash-jump: direction={}", self.movement);
            }

            if now >= self.dash_time || input.dash_just_released {
                self.dashing = false;
                out.events.push(MotorEvent::Sparks(false));
                out.events.push(MotorEvent::Dust(false));
            }
        }
    }

    fn handle_dash(
        &mut self,
        input: &MovementInput,
        tuning: &MovementTuning,
        now: f32,
        out: &mut MotorStep,
    ) {
        if !self.grounded || self.dashing || self.dash_jumping {
            return;
        }

        if input.dash_just_pressed
            && now > self.last_dash_time + tuning.dash_cooldown
            && self.movement != 0.0
        {
            self.dashing = true;
            self.dash_time = now + tuning.dash_duration;
            self.dash_direction = if self.movement > 0.0 { 1.0 } else { -1.0 };
            self.last_dash_time = now;

            out.events.push(MotorEvent::DashSfx);
            out.events.push(MotorEvent::Sparks(true));
            out.events.push(MotorEvent::Dust(true));
            debug!(
                "Dash started: direction={}, ends_at={:.2}",
                self.dash_direction, self.dash_time
            );
        }
    }

    fn handle_wall_jump(
        &mut self,
        input: &MovementInput,
        tuning: &MovementTuning,
        now: f32,
        out: &mut MotorStep,
    ) {
        if !(self.wall_attached && input.jump_just_pressed) {
            return;
        }

        self.wall_jumping = true;
        // Push off away from the wall being pressed into
        self.wall_jump_direction = if self.movement > 0.0 { -1.0 } else { 1.0 };
        self.wall_jump_time = now + tuning.wall_jump_cooldown;
        self.velocity.y = tuning.wall_jump_velocity();
        self.wall_attached = false;
        self.cancelled_wall_jump = false;
        out.events.push(MotorEvent::SightContact(false));
        debug!(
            "Wall jump: direction={}, window_ends_at={:.2}",
            self.wall_jump_direction, self.wall_jump_time
        );
    }

    fn apply_horizontal(
        &mut self,
        tuning: &MovementTuning,
        frame: MotorFrame,
        out: &mut MotorStep,
    ) {
        let dt = frame.dt;

        if self.dash_jumping {
            out.displacement.x += tuning.dash_speed * dt * self.movement;
        } else if self.wall_jumping && !self.cancelled_wall_jump && frame.now <= self.wall_jump_time
        {
            let progress = wall_jump_progress(self.wall_jump_time, frame.now, tuning);
            let speed =
                tuning.move_speed + (tuning.wall_jump_end_speed - tuning.move_speed) * progress;
            out.displacement.x += speed * dt * self.wall_jump_direction;
        } else if self.wall_jumping {
            out.displacement.x += (tuning.move_speed + tuning.wall_jump_boost) * dt * self.movement;
        } else if !self.dashing {
            out.displacement.x += tuning.move_speed * dt * self.movement;
        }
    }

    fn apply_vertical(&mut self, tuning: &MovementTuning, frame: MotorFrame, out: &mut MotorStep) {
        let dt = frame.dt;

        if self.dashing {
            // Steering stays live during a dash
            self.dash_direction = self.movement;
            out.displacement.x += self.dash_direction * tuning.dash_speed * dt;
        } else if self.wall_attached {
            self.velocity.y = -tuning.wall_slide_speed;
        } else if !self.grounded {
            self.velocity.y -= tuning.gravity * dt;
        } else if self.velocity.y < 0.0 {
            self.velocity.y = -tuning.grounded_stick_speed;
        }

        out.displacement += self.velocity * dt;
    }

    fn animation(&mut self) -> AnimationParams {
        if self.movement > 0.0 {
            self.facing = Facing::Right;
        } else if self.movement < 0.0 {
            self.facing = Facing::Left;
        }

        AnimationParams {
            speed: self.movement.abs(),
            jumping: !self.grounded && self.velocity.y > 0.0,
            facing: self.facing,
        }
    }

    /// Report from the wall sight. Attaches only when pressing a direction,
    /// airborne, and falling; any other report clears the attachment and is
    /// answered with `attached: false` so the sight keeps probing.
    pub fn set_is_touching_wall(&mut self, touching: bool, grounded: bool) -> WallContactReply {
        if touching && self.movement != 0.0 && !grounded && self.velocity.y < 0.0 {
            let stop_dust = self.dash_jumping;
            self.dash_jumping = false;
            if !self.wall_attached {
                debug!("Attached to wall: movement={}", self.movement);
            }
            self.wall_attached = true;
            WallContactReply {
                attached: true,
                stop_dust,
            }
        } else {
            self.wall_attached = false;
            WallContactReply {
                attached: false,
                stop_dust: false,
            }
        }
    }

    /// Zeroed animation state for win/lose/reset freezes. The caller also
    /// stops the dash sparks.
    pub fn freeze_animator_body(&self) -> AnimationParams {
        AnimationParams {
            speed: 0.0,
            jumping: false,
            facing: self.facing,
        }
    }
}

/// Fraction of the wall-jump window already elapsed, in [0, 1]
fn wall_jump_progress(window_end: f32, now: f32, tuning: &MovementTuning) -> f32 {
    if tuning.wall_jump_cooldown <= 0.0 {
        return 1.0;
    }
    (1.0 - (window_end - now) / tuning.wall_jump_cooldown).clamp(0.0, 1.0)
}
