mod classic;
mod hand;
mod router;

pub use classic::classic_input_system;
pub use hand::{hand_flight_input_system, map_hand_orientation, sample_hand_axes};
pub use router::{input_router_system, route_controls};
