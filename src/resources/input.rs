use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::ControlSignal;
use crate::resources::Chirality;
use crate::utils::math::rad_to_deg;

/// One tracked hand as reported by the perception subsystem.
#[derive(Debug, Clone, Copy)]
pub struct HandPose {
    pub chirality: Chirality,
    /// Hand orientation, hand frame to world frame
    pub orientation: UnitQuaternion<f64>,
}

impl HandPose {
    pub fn new(chirality: Chirality, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            chirality,
            orientation,
        }
    }

    /// Orientation as (roll, pitch, yaw) euler angles in degrees.
    pub fn euler_degrees(&self) -> Vector3<f64> {
        let (roll, pitch, yaw) = self.orientation.euler_angles();
        Vector3::new(rad_to_deg(roll), rad_to_deg(pitch), rad_to_deg(yaw))
    }
}

/// Boundary resource written by the external hand-tracking source every
/// frame. An empty frame (tracking lost) is distinct from a present hand
/// with identity rotation.
#[derive(Resource, Debug, Clone, Default)]
pub struct HandTracking {
    hands: Vec<HandPose>,
}

impl HandTracking {
    pub fn set_hands(&mut self, hands: Vec<HandPose>) {
        self.hands = hands;
    }

    pub fn clear(&mut self) {
        self.hands.clear();
    }

    pub fn hands(&self) -> &[HandPose] {
        &self.hands
    }

    /// First tracked hand of the given chirality, if any.
    pub fn find(&self, chirality: Chirality) -> Option<&HandPose> {
        self.hands.iter().find(|hand| hand.chirality == chirality)
    }
}

/// Axes produced by the hand-pose normaliser this frame.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct HandAxes(pub ControlSignal);

/// Axes from the classic analog source (keyboard, gamepad, or an external
/// collaborator writing directly).
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct ClassicAxes(pub ControlSignal);

/// Which input sources participate in the fused signal.
#[derive(Resource, Debug, Clone, Copy)]
pub struct InputRouter {
    pub hand_enabled: bool,
    pub classic_enabled: bool,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self {
            hand_enabled: true,
            classic_enabled: true,
        }
    }
}

/// The authoritative fused pitch/roll/yaw consumed by flight dynamics.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct RoutedControls(pub ControlSignal);
