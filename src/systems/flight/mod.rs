mod dynamics;
mod fuel;

pub use dynamics::{
    apply_steering, apply_speed_limits, integrate_state, physics_integrator_system,
    steering_system,
};
pub use fuel::{fuel_drain, fuel_drain_system, maneuver_intensity};
