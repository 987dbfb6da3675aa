use std::time::Duration;

use bevy::app::{AppExit, ScheduleRunnerPlugin};
use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use skyrings::components::{FuelCheckpoint, TurbulenceHazard};
use skyrings::plugins::{
    spawn_fuel_checkpoint, spawn_turbulence_hazard, spawn_win_trigger, FlightPlugin, InputPlugin,
    SessionPlugin, WorldPlugin,
};
use skyrings::resources::{
    Chirality, GameSession, GameState, GameStateChanged, HandPose, HandTracking,
};
use skyrings::utils::math::deg_to_rad;

/// Headless demo: a scripted right hand flies the course until the session
/// ends.
fn main() {
    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_secs_f64(1.0 / 60.0),
        )))
        .add_plugins((
            SessionPlugin::default(),
            InputPlugin::default(),
            FlightPlugin::default(),
            WorldPlugin,
        ))
        .add_systems(Startup, spawn_course)
        .add_systems(Update, (scripted_pilot, log_session, watch_game_over))
        .run();
}

fn spawn_course(mut commands: Commands) {
    spawn_fuel_checkpoint(
        &mut commands,
        Vector3::new(150.0, 0.0, -50.0),
        FuelCheckpoint::default(),
        12.0,
    );
    spawn_fuel_checkpoint(
        &mut commands,
        Vector3::new(320.0, 15.0, -55.0),
        FuelCheckpoint {
            respawn_delay: 10.0,
            ..FuelCheckpoint::default()
        },
        12.0,
    );
    spawn_turbulence_hazard(
        &mut commands,
        Vector3::new(480.0, -10.0, -50.0),
        TurbulenceHazard::default(),
        15.0,
    );
    spawn_win_trigger(&mut commands, Vector3::new(900.0, 0.0, -50.0), 20.0);
}

/// Feeds a synthetic right-hand pose: neutral pitch, a slow roll sway.
fn scripted_pilot(
    time: Res<Time>,
    mut tracking: ResMut<HandTracking>,
    mut session: ResMut<GameSession>,
) {
    if session.state() == GameState::HandSelection {
        session.select_hand(Chirality::Right);
    }

    let sway = deg_to_rad(8.0) * (time.elapsed_secs_f64() * 0.5).sin();
    let orientation = UnitQuaternion::from_euler_angles(sway, deg_to_rad(-15.0), 0.0);
    tracking.set_hands(vec![HandPose::new(Chirality::Right, orientation)]);
}

fn log_session(time: Res<Time>, session: Res<GameSession>, mut next_log: Local<f64>) {
    if time.elapsed_secs_f64() < *next_log {
        return;
    }
    *next_log = time.elapsed_secs_f64() + 1.0;
    info!(
        "[{:?}] fuel {:.1}/{:.1}, score {:.0}, {}",
        session.state(),
        session.fuel(),
        session.max_fuel(),
        session.score(),
        session.status()
    );
}

fn watch_game_over(
    session: Res<GameSession>,
    mut events: EventReader<GameStateChanged>,
    mut exit: EventWriter<AppExit>,
) {
    for event in events.read() {
        if event.to == GameState::GameOver {
            match session.outcome() {
                Some(reason) if reason.is_win() => info!("Won: {}", reason.message()),
                Some(reason) => info!("Lost: {}", reason.message()),
                None => {}
            }
            exit.send(AppExit::Success);
        }
    }
}
