use bevy::prelude::*;

use crate::components::{AircraftConfig, ControlSignal, PlayerController};
use crate::resources::{GameSession, RoutedControls};
use crate::utils::math::clamp01;

/// Per-frame fuel drain, coupled to how hard the player is steering.
pub fn fuel_drain_system(
    time: Res<Time>,
    controls: Res<RoutedControls>,
    mut session: ResMut<GameSession>,
    query: Query<&AircraftConfig, With<PlayerController>>,
) {
    if !session.is_playing() {
        return;
    }

    let dt = time.delta_secs_f64();
    for config in query.iter() {
        session.consume_fuel(fuel_drain(config, &controls.0, dt));
    }
}

/// Aggregate steering magnitude in [0, 1]; yaw is free, matching the
/// original tuning where only pitch and roll cost extra fuel.
pub fn maneuver_intensity(controls: &ControlSignal) -> f64 {
    clamp01(controls.pitch.abs() + controls.roll.abs())
}

/// Idle cost plus maneuver surcharge over `dt` seconds.
pub fn fuel_drain(config: &AircraftConfig, controls: &ControlSignal, dt: f64) -> f64 {
    (config.idle_fuel_drain + maneuver_intensity(controls) * config.maneuver_fuel_multiplier) * dt
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_idle_drain_with_neutral_input() {
        let config = AircraftConfig::default();
        let drain = fuel_drain(&config, &ControlSignal::NEUTRAL, 2.0);
        assert_relative_eq!(drain, config.idle_fuel_drain * 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_maneuver_intensity_saturates() {
        assert_relative_eq!(
            maneuver_intensity(&ControlSignal::new(0.3, 0.2, 0.9)),
            0.5
        );
        assert_relative_eq!(maneuver_intensity(&ControlSignal::new(1.0, 1.0, 0.0)), 1.0);
        assert_relative_eq!(
            maneuver_intensity(&ControlSignal::new(-0.6, -0.6, 0.0)),
            1.0
        );
    }

    #[test]
    fn test_yaw_does_not_cost_fuel() {
        let config = AircraftConfig::default();
        let yaw_only = fuel_drain(&config, &ControlSignal::new(0.0, 0.0, 1.0), 1.0);
        let neutral = fuel_drain(&config, &ControlSignal::NEUTRAL, 1.0);
        assert_relative_eq!(yaw_only, neutral, epsilon = 1e-12);
    }

    #[test]
    fn test_hard_maneuvering_drains_faster() {
        let config = AircraftConfig::default();
        let hard = fuel_drain(&config, &ControlSignal::new(1.0, 1.0, 0.0), 1.0);
        let idle = fuel_drain(&config, &ControlSignal::NEUTRAL, 1.0);
        assert_relative_eq!(
            hard - idle,
            config.maneuver_fuel_multiplier,
            epsilon = 1e-12
        );
    }
}
