use bevy::prelude::*;

use crate::components::ControlSignal;
use crate::resources::ClassicAxes;

/// Samples the classic analog source from the keyboard when bevy input is
/// available.
///
/// Headless hosts run without an input plugin; in that case the resource
/// is absent and `ClassicAxes` is left untouched, so external collaborators
/// may write the axes directly instead.
pub fn classic_input_system(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut axes: ResMut<ClassicAxes>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    let mut signal = ControlSignal::NEUTRAL;

    if keyboard.pressed(KeyCode::ArrowUp) {
        signal.pitch += 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowDown) {
        signal.pitch -= 1.0;
    }
    // Rolling left is positive, matching the hand-twist convention
    if keyboard.pressed(KeyCode::ArrowLeft) {
        signal.roll += 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowRight) {
        signal.roll -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        signal.yaw += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        signal.yaw -= 1.0;
    }

    axes.0 = signal;
}
