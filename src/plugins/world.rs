use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    FuelCheckpoint, SpatialComponent, TriggerVolume, TurbulenceHazard, WinTrigger,
};
use crate::plugins::FrameSet;
use crate::systems::{
    checkpoint_respawn_system, checkpoint_system, hazard_system, win_trigger_system,
    CheckpointCollected, HazardStruck,
};

/// Wires the world-trigger systems: fuel rings, turbulence hazards, and
/// the goal region.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CheckpointCollected>()
            .add_event::<HazardStruck>();

        app.add_systems(
            Update,
            (
                checkpoint_system,
                checkpoint_respawn_system,
                hazard_system,
                win_trigger_system,
            )
                .in_set(FrameSet::WorldTriggers),
        );
    }
}

/// Spawn a fuel ring at `position`.
pub fn spawn_fuel_checkpoint(
    commands: &mut Commands,
    position: Vector3<f64>,
    checkpoint: FuelCheckpoint,
    radius: f64,
) -> Entity {
    commands
        .spawn((
            SpatialComponent::at_position(position),
            TriggerVolume { radius },
            checkpoint,
        ))
        .id()
}

/// Spawn a turbulence hazard at `position`.
pub fn spawn_turbulence_hazard(
    commands: &mut Commands,
    position: Vector3<f64>,
    hazard: TurbulenceHazard,
    radius: f64,
) -> Entity {
    commands
        .spawn((
            SpatialComponent::at_position(position),
            TriggerVolume { radius },
            hazard,
        ))
        .id()
}

/// Spawn the goal region at `position`.
pub fn spawn_win_trigger(commands: &mut Commands, position: Vector3<f64>, radius: f64) -> Entity {
    commands
        .spawn((
            SpatialComponent::at_position(position),
            TriggerVolume { radius },
            WinTrigger::default(),
        ))
        .id()
}
