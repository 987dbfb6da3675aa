mod game;
mod input;
mod physics;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::components::{AircraftConfig, StartConfig};
use crate::utils::SimError;

pub use game::GameConfig;
pub use input::HandInputConfig;
pub use physics::PhysicsConfig;

/// Complete simulation configuration, loadable from YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub hand_input: HandInputConfig,
    #[serde(default)]
    pub aircraft: AircraftConfig,
    #[serde(default)]
    pub start: StartConfig,
}

impl SimConfig {
    /// Load and validate a configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let contents = fs::read_to_string(path)?;
        let config: SimConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject malformed setups before the simulation starts. Gameplay
    /// paths assume these bounds and never re-check them per frame.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.physics.timestep <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "physics timestep must be positive, got {}",
                self.physics.timestep
            )));
        }
        if self.game.max_fuel <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "max fuel must be positive, got {}",
                self.game.max_fuel
            )));
        }
        if self.game.starting_fuel <= 0.0 || self.game.starting_fuel > self.game.max_fuel {
            return Err(SimError::InvalidConfig(format!(
                "starting fuel must be in (0, {}], got {}",
                self.game.max_fuel, self.game.starting_fuel
            )));
        }
        if self.game.countdown_duration < 0.0 {
            return Err(SimError::InvalidConfig(
                "countdown duration must not be negative".to_string(),
            ));
        }
        if self.aircraft.max_speed <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "max speed must be positive, got {}",
                self.aircraft.max_speed
            )));
        }
        if self.aircraft.idle_fuel_drain < 0.0 || self.aircraft.maneuver_fuel_multiplier < 0.0 {
            return Err(SimError::InvalidConfig(
                "fuel drain rates must not be negative".to_string(),
            ));
        }
        for (name, half_range) in [
            ("pitch", self.hand_input.pitch_half_range_deg),
            ("roll", self.hand_input.roll_half_range_deg),
            ("yaw", self.hand_input.yaw_half_range_deg),
        ] {
            if half_range <= 0.0 {
                return Err(SimError::InvalidConfig(format!(
                    "{} half range must be positive, got {}",
                    name, half_range
                )));
            }
        }
        for (name, deadzone) in [
            ("pitch", self.hand_input.pitch_deadzone_deg),
            ("roll", self.hand_input.roll_deadzone_deg),
            ("yaw", self.hand_input.yaw_deadzone_deg),
        ] {
            if deadzone < 0.0 {
                return Err(SimError::InvalidConfig(format!(
                    "{} deadzone must not be negative, got {}",
                    name, deadzone
                )));
            }
        }
        Ok(())
    }
}
