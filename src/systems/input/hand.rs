use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::ControlSignal;
use crate::resources::{Chirality, GameSession, HandAxes, HandInputConfig, HandTracking};
use crate::utils::math::{apply_deadzone, wrap_angle_deg};

/// Samples the tracked hand matching the session's selected chirality and
/// normalises its orientation into steering axes.
///
/// Losing tracking, or having no hand selected yet, yields exactly neutral
/// axes. The aircraft must never hold its last commanded attitude off a
/// stale pose.
pub fn hand_flight_input_system(
    tracking: Res<HandTracking>,
    session: Res<GameSession>,
    config: Res<HandInputConfig>,
    mut axes: ResMut<HandAxes>,
) {
    axes.0 = sample_hand_axes(&tracking, session.selected_hand(), &config);
}

/// Pure sampling step: pick the hand, or fall back to neutral.
pub fn sample_hand_axes(
    tracking: &HandTracking,
    selected: Option<Chirality>,
    config: &HandInputConfig,
) -> ControlSignal {
    let Some(hand) = selected.and_then(|chirality| tracking.find(chirality)) else {
        return ControlSignal::NEUTRAL;
    };
    map_hand_orientation(hand.euler_degrees(), config)
}

/// Map a hand orientation, given as (roll, pitch, yaw) euler angles in
/// degrees, into pitch/roll/yaw control axes.
///
/// Per axis: wrap into (-180, 180], divide by the axis half-range and
/// clamp to [-1, 1], cut the deadzone band to exact zero, then scale by
/// sensitivity. Pitch additionally gets the neutral-pose offset before the
/// half-range division, since a relaxed palm-down hand sits nose-down.
pub fn map_hand_orientation(euler_deg: Vector3<f64>, config: &HandInputConfig) -> ControlSignal {
    let roll_angle = wrap_angle_deg(euler_deg.x);
    let pitch_angle = wrap_angle_deg(euler_deg.y);
    let yaw_angle = wrap_angle_deg(euler_deg.z);

    let pitch = apply_deadzone(
        ((pitch_angle + config.pitch_offset_deg) / config.pitch_half_range_deg).clamp(-1.0, 1.0),
        config.pitch_deadzone_deg / 90.0,
    ) * config.pitch_sensitivity;

    let roll = apply_deadzone(
        (roll_angle / config.roll_half_range_deg).clamp(-1.0, 1.0),
        config.roll_deadzone_deg / 90.0,
    ) * config.roll_sensitivity;

    let yaw = apply_deadzone(
        (yaw_angle / config.yaw_half_range_deg).clamp(-1.0, 1.0),
        config.yaw_deadzone_deg / 90.0,
    ) * config.yaw_sensitivity;

    ControlSignal { pitch, roll, yaw }
}
