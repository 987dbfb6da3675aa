use serde::{Deserialize, Serialize};

/// A pitch/roll/yaw steering triple.
///
/// Normalised sources produce each axis in [-1, 1]; the router sums sources
/// without renormalising, so fused values may exceed that range. Recomputed
/// every frame, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlSignal {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

impl ControlSignal {
    pub const NEUTRAL: ControlSignal = ControlSignal {
        pitch: 0.0,
        roll: 0.0,
        yaw: 0.0,
    };

    pub fn new(pitch: f64, roll: f64, yaw: f64) -> Self {
        Self { pitch, roll, yaw }
    }

    /// Per-axis sum, used by the router's additive fusion.
    pub fn add(&self, other: &ControlSignal) -> ControlSignal {
        ControlSignal {
            pitch: self.pitch + other.pitch,
            roll: self.roll + other.roll,
            yaw: self.yaw + other.yaw,
        }
    }
}
