use bevy::prelude::*;
use nalgebra::Vector3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::components::SpatialComponent;

/// Tuning parameters for the arcade flight model.
///
/// Defaults match the original game tuning: enough thrust to cruise well
/// below `max_speed`, torque authority that favours roll over yaw, and a
/// fuel budget drained faster under hard maneuvering.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct AircraftConfig {
    /// Base forward thrust applied every physics step [m/s²]
    pub forward_thrust: f64,
    /// Maximum linear speed allowed for the aircraft [m/s]
    pub max_speed: f64,
    /// Torque strength applied when pitching [rad/s²]
    pub pitch_torque: f64,
    /// Torque strength applied when yawing [rad/s²]
    pub yaw_torque: f64,
    /// Torque strength applied when rolling [rad/s²]
    pub roll_torque: f64,
    /// Linear damping coefficient [1/s]
    pub linear_damping: f64,
    /// Angular damping coefficient, stabilises the plane [1/s]
    pub angular_damping: f64,
    /// Ceiling on the body angular rate [rad/s]
    pub max_angular_rate: f64,
    /// Base fuel consumed per second while the plane is active
    pub idle_fuel_drain: f64,
    /// Additional fuel multiplier applied based on steering intensity
    pub maneuver_fuel_multiplier: f64,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self {
            forward_thrust: 50.0,
            max_speed: 75.0,
            pitch_torque: 35.0,
            yaw_torque: 20.0,
            roll_torque: 45.0,
            linear_damping: 0.2,
            angular_damping: 2.0,
            max_angular_rate: 10.0,
            idle_fuel_drain: 1.2,
            maneuver_fuel_multiplier: 1.4,
        }
    }
}

/// Starting pose for an aircraft, either fixed or drawn from a seeded
/// distribution around an origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StartConfig {
    Fixed(FixedStartConfig),
    Random(RandomStartConfig),
}

impl Default for StartConfig {
    fn default() -> Self {
        StartConfig::Fixed(FixedStartConfig::default())
    }
}

impl StartConfig {
    /// Resolve the configured start into a concrete spawn pose.
    pub fn spawn_pose(&self) -> SpatialComponent {
        match self {
            StartConfig::Fixed(fixed) => {
                SpatialComponent::at_position_and_heading(fixed.position, fixed.heading)
            }
            StartConfig::Random(random) => {
                let (position, heading) = random.generate();
                SpatialComponent::at_position_and_heading(position, heading)
            }
        }
    }
}

/// Fixed starting position and heading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedStartConfig {
    /// Start position in world frame [m]
    pub position: Vector3<f64>,
    /// Initial heading [rad]
    pub heading: f64,
}

impl Default for FixedStartConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, -50.0),
            heading: 0.0,
        }
    }
}

/// Randomised starting pose around an origin, reproducible via a seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomStartConfig {
    /// Centre of the spawn region [m]
    pub origin: Vector3<f64>,
    /// Horizontal scatter around the origin [m]
    pub variance: f64,
    /// Seed for the random number generator
    pub seed: Option<u64>,
}

impl Default for RandomStartConfig {
    fn default() -> Self {
        Self {
            origin: Vector3::new(0.0, 0.0, -50.0),
            variance: 100.0,
            seed: None,
        }
    }
}

impl RandomStartConfig {
    pub fn generate(&self) -> (Vector3<f64>, f64) {
        let seed = self.seed.unwrap_or_else(rand::random);
        info!("Generating start pose with seed: {}", seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let position = Vector3::new(
            self.origin.x + rng.gen_range(-self.variance..=self.variance),
            self.origin.y + rng.gen_range(-self.variance..=self.variance),
            self.origin.z,
        );
        let heading = rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI);
        (position, heading)
    }
}
