use bevy::prelude::*;

use crate::components::{AircraftConfig, PhysicsComponent, PlayerController, StartConfig};
use crate::plugins::FrameSet;
use crate::resources::{PhysicsConfig, SessionAnchor};
use crate::systems::{fuel_drain_system, physics_integrator_system, steering_system};

/// Fixed-step simulation stages
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum PhysicsSet {
    Steering,
    Integration,
}

/// Spawns the player aircraft and wires the fixed-step flight model plus
/// the per-frame fuel drain.
pub struct FlightPlugin {
    pub physics: PhysicsConfig,
    pub aircraft: AircraftConfig,
    pub start: StartConfig,
}

impl Default for FlightPlugin {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            aircraft: AircraftConfig::default(),
            start: StartConfig::default(),
        }
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        let spawn_pose = self.start.spawn_pose();
        let aircraft = self.aircraft.clone();

        app.insert_resource(self.physics);
        app.insert_resource(Time::<Fixed>::from_seconds(self.physics.timestep));
        app.insert_resource(SessionAnchor {
            start: spawn_pose.clone(),
        });

        app.add_systems(Startup, move |mut commands: Commands| {
            info!("Spawning player aircraft at {:?}", spawn_pose.position);
            commands.spawn((
                PlayerController,
                aircraft.clone(),
                spawn_pose.clone(),
                PhysicsComponent::default(),
            ));
        });

        app.configure_sets(
            FixedUpdate,
            (PhysicsSet::Steering, PhysicsSet::Integration).chain(),
        );
        app.add_systems(
            FixedUpdate,
            (
                steering_system.in_set(PhysicsSet::Steering),
                physics_integrator_system.in_set(PhysicsSet::Integration),
            ),
        );

        app.add_systems(Update, fuel_drain_system.in_set(FrameSet::FuelDrain));
    }
}
