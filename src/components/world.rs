use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Spherical trigger region checked against the aircraft position.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TriggerVolume {
    /// Radius for overlap checks [m]
    pub radius: f64,
}

impl Default for TriggerVolume {
    fn default() -> Self {
        Self { radius: 8.0 }
    }
}

/// An airborne ring that awards fuel when the plane flies through it.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct FuelCheckpoint {
    /// Fuel amount granted to the player when collected
    pub fuel_reward: f64,
    /// Time before the checkpoint respawns. Zero means single use [s]
    pub respawn_delay: f64,
    /// Upward velocity impulse applied to the plane on collection [m/s]
    pub collect_impulse: f64,
    /// Whether the checkpoint can currently be collected
    #[serde(skip, default = "default_active")]
    pub active: bool,
    /// Remaining time until the checkpoint re-enables [s]
    #[serde(skip)]
    pub respawn_timer: f64,
}

fn default_active() -> bool {
    true
}

impl Default for FuelCheckpoint {
    fn default() -> Self {
        Self {
            fuel_reward: 10.0,
            respawn_delay: 0.0,
            collect_impulse: 15.0,
            active: true,
            respawn_timer: 0.0,
        }
    }
}

impl FuelCheckpoint {
    /// Disable after collection and arm the respawn timer if configured.
    pub fn collect(&mut self) {
        self.active = false;
        if self.respawn_delay > 0.0 {
            self.respawn_timer = self.respawn_delay;
        }
    }
}

/// Turbulent region that saps fuel and shoves the plane away on contact.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct TurbulenceHazard {
    /// Fuel penalty applied when the player hits the hazard
    pub fuel_penalty: f64,
    /// Velocity impulse pushing the plane away from the hazard [m/s]
    pub knockback_force: f64,
    /// Cooldown between repeated hits while inside the region [s]
    pub hit_cooldown: f64,
    #[serde(skip)]
    pub cooldown_timer: f64,
}

impl Default for TurbulenceHazard {
    fn default() -> Self {
        Self {
            fuel_penalty: 8.0,
            knockback_force: 15.0,
            hit_cooldown: 1.0,
            cooldown_timer: 0.0,
        }
    }
}

/// Goal region that ends the session with a win on first contact.
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct WinTrigger {
    /// Set once the trigger has fired; it never fires again
    #[serde(skip)]
    pub consumed: bool,
}
