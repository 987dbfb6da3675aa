use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{PhysicsComponent, PlayerController, SpatialComponent};
use crate::resources::{GameSession, GameStateChanged, SessionAnchor};

/// Per-frame session update: countdown, the defensive fuel check, and
/// distance-based score accrual while playing.
pub fn session_update_system(
    time: Res<Time>,
    anchor: Res<SessionAnchor>,
    mut session: ResMut<GameSession>,
    player: Query<&SpatialComponent, With<PlayerController>>,
) {
    let dt = time.delta_secs_f64();
    session.tick(dt);

    if let Ok(spatial) = player.get_single() {
        let delta = distance_score_delta(
            &anchor.start.position,
            &spatial.position,
            session.distance_score_multiplier(),
            dt,
        );
        session.accrue_distance_score(delta);
    }
}

/// Distance-from-start scoring over one frame.
pub fn distance_score_delta(
    start: &Vector3<f64>,
    position: &Vector3<f64>,
    multiplier: f64,
    dt: f64,
) -> f64 {
    (position - start).norm() * multiplier * dt
}

/// Applies a pending retry reset: the aircraft returns to its spawn pose
/// and carries no residual motion or forces into the next run.
pub fn session_reset_system(
    anchor: Res<SessionAnchor>,
    mut session: ResMut<GameSession>,
    mut player: Query<(&mut SpatialComponent, &mut PhysicsComponent), With<PlayerController>>,
) {
    if !session.take_pending_reset() {
        return;
    }

    info!("Session reset: restoring aircraft spawn pose");
    for (mut spatial, mut physics) in player.iter_mut() {
        *spatial = anchor.start.clone();
        physics.clear();
    }
}

/// Pumps recorded state transitions out to the event bus for the UI,
/// audio, and VFX collaborators.
pub fn session_event_system(
    mut session: ResMut<GameSession>,
    mut events: EventWriter<GameStateChanged>,
) {
    for transition in session.drain_transitions() {
        info!("State change: {:?} -> {:?}", transition.from, transition.to);
        events.send(transition);
    }
}
