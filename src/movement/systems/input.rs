//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

const STICK_DEADZONE: f32 = 0.5;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut input: ResMut<MovementInput>,
) {
    // Horizontal axis: stick/d-pad first, arrow keys override
    let mut x = 0.0;
    for gamepad in &gamepads {
        let stick = gamepad.left_stick().x;
        if stick.abs() > STICK_DEADZONE {
            x = stick.signum();
        }
        if gamepad.pressed(GamepadButton::DPadLeft) {
            x = -1.0;
        }
        if gamepad.pressed(GamepadButton::DPadRight) {
            x = 1.0;
        }
    }
    if keyboard.pressed(KeyCode::ArrowRight) {
        x = 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowLeft) {
        x = -1.0;
    }

    input.axis = Vec2::new(x, 0.0);

    input.jump_just_pressed = keyboard.just_pressed(KeyCode::KeyX)
        || gamepads
            .iter()
            .any(|g| g.just_pressed(GamepadButton::South));
    input.jump_just_released = keyboard.just_released(KeyCode::KeyX)
        || gamepads
            .iter()
            .any(|g| g.just_released(GamepadButton::South));
    input.dash_just_pressed = keyboard.just_pressed(KeyCode::KeyA)
        || gamepads
            .iter()
            .any(|g| g.just_pressed(GamepadButton::RightTrigger));
    input.dash_just_released = keyboard.just_released(KeyCode::KeyA)
        || gamepads
            .iter()
            .any(|g| g.just_released(GamepadButton::RightTrigger));
    input.popup_just_pressed = keyboard.just_pressed(KeyCode::Tab);
}
