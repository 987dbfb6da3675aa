use serde::{Deserialize, Serialize};

use crate::resources::session::RetryTarget;

/// Session tuning: fuel budget, scoring, and flow timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fuel at session start
    pub starting_fuel: f64,
    /// Fuel tank capacity
    pub max_fuel: f64,
    /// Fixed score bonus per collected checkpoint
    pub score_per_checkpoint: f64,
    /// Score accrued per metre of distance from start, per second
    pub distance_score_multiplier: f64,
    /// Countdown length before play begins [s]
    pub countdown_duration: f64,
    /// Where a retry lands after game over
    pub retry_target: RetryTarget,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_fuel: 30.0,
            max_fuel: 60.0,
            score_per_checkpoint: 100.0,
            distance_score_multiplier: 1.0,
            countdown_duration: 3.0,
            retry_target: RetryTarget::HandSelection,
        }
    }
}
