use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{
    AircraftConfig, ControlSignal, PhysicsComponent, PlayerController, SpatialComponent,
};
use crate::resources::{GameSession, PhysicsConfig, RoutedControls};

/// Fixed-step steering: accumulates thrust and control torque for the
/// player aircraft.
///
/// Outside the `Playing` state no force or torque is applied at all; the
/// integrator still runs, so the aircraft free-drifts under damping.
pub fn steering_system(
    session: Res<GameSession>,
    controls: Res<RoutedControls>,
    mut query: Query<
        (&AircraftConfig, &SpatialComponent, &mut PhysicsComponent),
        With<PlayerController>,
    >,
) {
    for (config, spatial, mut physics) in query.iter_mut() {
        physics.clear();
        if !session.is_playing() {
            continue;
        }
        apply_steering(config, spatial, &controls.0, &mut physics);
    }
}

/// Constant forward thrust plus torque proportional to the routed
/// pitch/roll/yaw, as accelerations about the body axes
/// (x roll, y pitch, z yaw).
pub fn apply_steering(
    config: &AircraftConfig,
    spatial: &SpatialComponent,
    controls: &ControlSignal,
    physics: &mut PhysicsComponent,
) {
    physics.add_acceleration(spatial.forward() * config.forward_thrust);
    physics.add_angular_acceleration(Vector3::new(
        controls.roll * config.roll_torque,
        controls.pitch * config.pitch_torque,
        controls.yaw * config.yaw_torque,
    ));
}

/// Fixed-step integration of the accumulated accelerations, followed by
/// the hard speed and angular-rate clamps.
pub fn physics_integrator_system(
    physics_config: Res<PhysicsConfig>,
    mut query: Query<(&AircraftConfig, &PhysicsComponent, &mut SpatialComponent)>,
) {
    let dt = physics_config.timestep;
    for (config, physics, mut spatial) in query.iter_mut() {
        integrate_state(physics, config, &mut spatial, dt);
        apply_speed_limits(&mut spatial, config.max_speed, config.max_angular_rate);
    }
}

/// Semi-implicit Euler step with Unity-style damping factors.
pub fn integrate_state(
    physics: &PhysicsComponent,
    config: &AircraftConfig,
    spatial: &mut SpatialComponent,
    dt: f64,
) {
    spatial.velocity += physics.net_acceleration * dt;
    spatial.velocity *= 1.0 / (1.0 + config.linear_damping * dt);
    spatial.position += spatial.velocity * dt;

    spatial.angular_velocity += physics.net_angular_acceleration * dt;
    spatial.angular_velocity *= 1.0 / (1.0 + config.angular_damping * dt);

    if spatial.angular_velocity.norm() > 0.0 {
        // Angular velocity is a body rate, so the incremental rotation is
        // composed on the body side of the attitude
        let rotation = UnitQuaternion::from_scaled_axis(spatial.angular_velocity * dt);
        spatial.attitude = spatial.attitude * rotation;
        spatial.attitude =
            UnitQuaternion::from_quaternion(spatial.attitude.into_inner().normalize());
    }
}

/// Rescale velocity and angular rate that exceed their limits, preserving
/// direction. A hard clamp, not a soft limit.
pub fn apply_speed_limits(spatial: &mut SpatialComponent, max_speed: f64, max_angular_rate: f64) {
    let speed = spatial.velocity.norm();
    if speed > max_speed {
        spatial.velocity *= max_speed / speed;
    }

    let angular_rate = spatial.angular_velocity.norm();
    if angular_rate > max_angular_rate {
        spatial.angular_velocity *= max_angular_rate / angular_rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn step(
        config: &AircraftConfig,
        spatial: &mut SpatialComponent,
        controls: &ControlSignal,
        dt: f64,
    ) {
        let mut physics = PhysicsComponent::default();
        apply_steering(config, spatial, controls, &mut physics);
        integrate_state(&physics, config, spatial, dt);
        apply_speed_limits(spatial, config.max_speed, config.max_angular_rate);
    }

    #[test]
    fn test_thrust_accelerates_forward() {
        let config = AircraftConfig::default();
        let mut spatial = SpatialComponent::default();
        step(&config, &mut spatial, &ControlSignal::NEUTRAL, 0.01);

        assert!(spatial.velocity.x > 0.0);
        assert_relative_eq!(spatial.velocity.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(spatial.velocity.z, 0.0, epsilon = 1e-12);
        assert!(spatial.position.x > 0.0);
    }

    #[test]
    fn test_speed_clamped_after_every_step() {
        let config = AircraftConfig {
            forward_thrust: 10_000.0,
            ..AircraftConfig::default()
        };
        let mut spatial = SpatialComponent::default();

        for _ in 0..200 {
            step(&config, &mut spatial, &ControlSignal::NEUTRAL, 1.0 / 120.0);
            assert!(
                spatial.speed() <= config.max_speed + 1e-9,
                "speed {} exceeded max {}",
                spatial.speed(),
                config.max_speed
            );
        }
        // The clamp should be active, not just never reached
        assert_relative_eq!(spatial.speed(), config.max_speed, epsilon = 1e-9);
    }

    #[test]
    fn test_clamp_preserves_direction() {
        let config = AircraftConfig::default();
        let mut spatial = SpatialComponent::default();
        spatial.velocity = Vector3::new(300.0, 400.0, 0.0);

        apply_speed_limits(&mut spatial, config.max_speed, config.max_angular_rate);
        assert_relative_eq!(spatial.speed(), config.max_speed, epsilon = 1e-9);
        assert_relative_eq!(
            spatial.velocity.y / spatial.velocity.x,
            400.0 / 300.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_roll_input_rolls_the_aircraft() {
        let config = AircraftConfig::default();
        let mut spatial = SpatialComponent::default();
        let controls = ControlSignal::new(0.0, 1.0, 0.0);

        // Short run: the euler roll angle wraps past pi on longer ones
        for _ in 0..12 {
            step(&config, &mut spatial, &controls, 1.0 / 120.0);
        }

        let (roll, _pitch, _yaw) = spatial.attitude.euler_angles();
        assert!(roll > 0.05, "expected a positive roll, got {}", roll);
    }

    #[test]
    fn test_angular_rate_clamped() {
        let config = AircraftConfig {
            roll_torque: 100_000.0,
            ..AircraftConfig::default()
        };
        let mut spatial = SpatialComponent::default();
        let controls = ControlSignal::new(0.0, 1.0, 0.0);

        for _ in 0..100 {
            step(&config, &mut spatial, &controls, 1.0 / 120.0);
            assert!(spatial.angular_velocity.norm() <= config.max_angular_rate + 1e-9);
        }
    }

    #[test]
    fn test_damping_decays_free_drift() {
        let config = AircraftConfig::default();
        let mut spatial = SpatialComponent::default();
        spatial.velocity = Vector3::new(40.0, 0.0, 0.0);
        spatial.angular_velocity = Vector3::new(2.0, 0.0, 0.0);

        // No steering accumulated, as when the session is not playing
        let physics = PhysicsComponent::default();
        for _ in 0..120 {
            integrate_state(&physics, &config, &mut spatial, 1.0 / 120.0);
        }

        assert!(spatial.speed() < 40.0);
        assert!(spatial.angular_velocity.norm() < 0.5);
    }

    #[test]
    fn test_state_stays_finite() {
        let config = AircraftConfig::default();
        let mut spatial = SpatialComponent::default();
        let controls = ControlSignal::new(1.0, -1.0, 1.0);

        for _ in 0..1000 {
            step(&config, &mut spatial, &controls, 1.0 / 120.0);
        }

        assert!(spatial.position.iter().all(|v| v.is_finite()));
        assert!(spatial.velocity.iter().all(|v| v.is_finite()));
        assert!(spatial.angular_velocity.iter().all(|v| v.is_finite()));
        let quat_norm = spatial.attitude.as_ref().norm();
        assert_relative_eq!(quat_norm, 1.0, epsilon = 1e-9);
    }
}
