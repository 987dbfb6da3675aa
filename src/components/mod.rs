mod aircraft;
mod controller;
mod controls;
mod physics;
mod spatial;
mod world;

pub use aircraft::{AircraftConfig, FixedStartConfig, RandomStartConfig, StartConfig};
pub use controller::PlayerController;
pub use controls::ControlSignal;
pub use physics::PhysicsComponent;
pub use spatial::SpatialComponent;
pub use world::{FuelCheckpoint, TriggerVolume, TurbulenceHazard, WinTrigger};
