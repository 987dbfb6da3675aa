use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use nalgebra::UnitQuaternion;

use skyrings::components::{
    AircraftConfig, PhysicsComponent, PlayerController, SpatialComponent, StartConfig,
};
use skyrings::resources::{
    Chirality, ClassicAxes, GameConfig, GameSession, GameState, GameStateChanged, HandAxes,
    HandInputConfig, HandPose, HandTracking, InputRouter, PhysicsConfig, RoutedControls,
    SessionAnchor,
};
use skyrings::systems::{
    checkpoint_respawn_system, checkpoint_system, classic_input_system, fuel_drain_system,
    hand_flight_input_system, hazard_system, input_router_system, physics_integrator_system,
    session_event_system, session_reset_system, session_update_system, steering_system,
    win_trigger_system, CheckpointCollected, HazardStruck,
};

/// Builder for a deterministic test application.
///
/// All systems run on `Update` in their production order, and `Time` is
/// driven with a manual delta equal to the physics timestep, so every
/// `app.update()` advances the simulation by exactly one step with no
/// wall-clock dependence.
pub struct TestAppBuilder {
    physics: PhysicsConfig,
    game: GameConfig,
    hand_input: HandInputConfig,
    aircraft: AircraftConfig,
    start: StartConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            game: GameConfig::default(),
            hand_input: HandInputConfig::default(),
            aircraft: AircraftConfig::default(),
            start: StartConfig::default(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    pub fn with_aircraft(mut self, aircraft: AircraftConfig) -> Self {
        self.aircraft = aircraft;
        self
    }

    pub fn with_start(mut self, start: StartConfig) -> Self {
        self.start = start;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            self.physics.timestep,
        )));

        let spawn_pose = self.start.spawn_pose();
        app.insert_resource(self.physics)
            .insert_resource(GameSession::new(self.game))
            .insert_resource(SessionAnchor {
                start: spawn_pose.clone(),
            })
            .insert_resource(self.hand_input)
            .init_resource::<HandTracking>()
            .init_resource::<HandAxes>()
            .init_resource::<ClassicAxes>()
            .init_resource::<InputRouter>()
            .init_resource::<RoutedControls>()
            .add_event::<GameStateChanged>()
            .add_event::<CheckpointCollected>()
            .add_event::<HazardStruck>();

        app.world_mut().spawn((
            PlayerController,
            self.aircraft,
            spawn_pose,
            PhysicsComponent::default(),
        ));

        app.add_systems(
            Update,
            (
                hand_flight_input_system,
                classic_input_system,
                input_router_system,
                steering_system,
                physics_integrator_system,
                fuel_drain_system,
                session_update_system,
                session_event_system,
                session_reset_system,
                checkpoint_system,
                checkpoint_respawn_system,
                hazard_system,
                win_trigger_system,
            )
                .chain(),
        );

        // Run an initial update to initialize everything
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn session(&self) -> &GameSession {
        self.app.world().resource::<GameSession>()
    }

    pub fn session_mut(&mut self) -> Mut<GameSession> {
        self.app.world_mut().resource_mut::<GameSession>()
    }

    pub fn get_resource<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn get_resource_mut<T: Resource>(&mut self) -> Option<Mut<T>> {
        self.app.world_mut().get_resource_mut::<T>()
    }

    pub fn query_single<T: Component + Clone>(&mut self) -> Option<T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok().cloned()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn player_spatial(&mut self) -> SpatialComponent {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&SpatialComponent, With<PlayerController>>();
        query
            .get_single(world)
            .expect("player aircraft not spawned")
            .clone()
    }

    pub fn set_player_spatial(&mut self, spatial: SpatialComponent) {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&mut SpatialComponent, With<PlayerController>>();
        *query
            .get_single_mut(world)
            .expect("player aircraft not spawned") = spatial;
    }

    /// Publish a synthetic hand pose for the next frame.
    pub fn set_hand_pose(&mut self, chirality: Chirality, orientation: UnitQuaternion<f64>) {
        self.get_resource_mut::<HandTracking>()
            .unwrap()
            .set_hands(vec![HandPose::new(chirality, orientation)]);
    }

    /// Drive the session through hand selection and the countdown so
    /// gameplay systems are live.
    pub fn start_playing(&mut self) {
        let mut session = self.session_mut();
        session.select_hand(Chirality::Right);
        session.tick(60.0);
        assert_eq!(session.state(), GameState::Playing);
        drop(session);
        self.run_frame();
    }
}
