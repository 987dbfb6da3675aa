use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Tunables for the hand-pose axis mapping.
///
/// Deadzones are given in degrees of hand rotation and converted to a
/// fraction of the full control range at mapping time. The pitch offset
/// corrects for the neutral palm-down pose sitting slightly nose-down.
#[derive(Resource, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HandInputConfig {
    pub pitch_sensitivity: f64,
    pub roll_sensitivity: f64,
    pub yaw_sensitivity: f64,

    pub pitch_deadzone_deg: f64,
    pub roll_deadzone_deg: f64,
    pub yaw_deadzone_deg: f64,

    /// Neutral-pose correction added to the pitch-plane angle [deg]
    pub pitch_offset_deg: f64,
    /// Hand tilt that maps to full pitch deflection [deg]
    pub pitch_half_range_deg: f64,
    /// Hand twist that maps to full roll deflection [deg]
    pub roll_half_range_deg: f64,
    /// Hand turn that maps to full yaw deflection [deg]
    pub yaw_half_range_deg: f64,
}

impl Default for HandInputConfig {
    fn default() -> Self {
        Self {
            pitch_sensitivity: 1.0,
            roll_sensitivity: 1.0,
            yaw_sensitivity: 1.0,
            pitch_deadzone_deg: 5.0,
            roll_deadzone_deg: 5.0,
            yaw_deadzone_deg: 5.0,
            pitch_offset_deg: 15.0,
            pitch_half_range_deg: 40.0,
            roll_half_range_deg: 45.0,
            yaw_half_range_deg: 45.0,
        }
    }
}
