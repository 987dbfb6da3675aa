use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Per-step acceleration accumulators for the arcade flight model.
///
/// Steering writes accelerations here every fixed step; the integrator
/// consumes and clears them. Forces are expressed directly as accelerations,
/// so there is no mass bookkeeping in the arcade model.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsComponent {
    /// Net linear acceleration in world frame [m/s²]
    pub net_acceleration: Vector3<f64>,
    /// Net angular acceleration in body frame [rad/s²]
    pub net_angular_acceleration: Vector3<f64>,
}

impl Default for PhysicsComponent {
    fn default() -> Self {
        Self {
            net_acceleration: Vector3::zeros(),
            net_angular_acceleration: Vector3::zeros(),
        }
    }
}

impl PhysicsComponent {
    pub fn add_acceleration(&mut self, acceleration: Vector3<f64>) {
        self.net_acceleration += acceleration;
    }

    pub fn add_angular_acceleration(&mut self, angular_acceleration: Vector3<f64>) {
        self.net_angular_acceleration += angular_acceleration;
    }

    pub fn clear(&mut self) {
        self.net_acceleration = Vector3::zeros();
        self.net_angular_acceleration = Vector3::zeros();
    }
}
