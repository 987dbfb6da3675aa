use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Fixed-step integration settings.
#[derive(Resource, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Fixed simulation timestep [s]
    pub timestep: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 120.0, // 120 Hz physics rate
        }
    }
}
