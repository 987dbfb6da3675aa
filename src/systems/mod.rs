pub mod flight;
pub mod input;
mod session;
mod world;

pub use flight::{
    apply_speed_limits, apply_steering, fuel_drain, fuel_drain_system, integrate_state,
    maneuver_intensity, physics_integrator_system, steering_system,
};
pub use input::{
    classic_input_system, hand_flight_input_system, input_router_system, map_hand_orientation,
    route_controls, sample_hand_axes,
};
pub use session::{
    distance_score_delta, session_event_system, session_reset_system, session_update_system,
};
pub use world::{
    checkpoint_respawn_system, checkpoint_system, hazard_system, overlaps, win_trigger_system,
    CheckpointCollected, HazardStruck,
};
