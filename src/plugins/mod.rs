mod flight;
mod input;
mod session;
mod world;

use bevy::prelude::*;

pub use flight::{FlightPlugin, PhysicsSet};
pub use input::InputPlugin;
pub use session::SessionPlugin;
pub use world::{spawn_fuel_checkpoint, spawn_turbulence_hazard, spawn_win_trigger, WorldPlugin};

/// Per-frame stages, chained so input is sampled and routed before anything
/// consumes it, and world triggers see the session state settled for the
/// frame.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FrameSet {
    SampleInput,
    RouteInput,
    FuelDrain,
    Session,
    WorldTriggers,
}
