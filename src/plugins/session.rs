use bevy::prelude::*;

use crate::plugins::FrameSet;
use crate::resources::{GameConfig, GameSession, GameStateChanged, SessionAnchor};
use crate::systems::{session_event_system, session_reset_system, session_update_system};

/// Owns the session state machine and the per-frame stage ordering.
#[derive(Default)]
pub struct SessionPlugin {
    pub game: GameConfig,
}

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GameSession::new(self.game.clone()))
            .init_resource::<SessionAnchor>()
            .add_event::<GameStateChanged>();

        app.configure_sets(
            Update,
            (
                FrameSet::SampleInput,
                FrameSet::RouteInput,
                FrameSet::FuelDrain,
                FrameSet::Session,
                FrameSet::WorldTriggers,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                session_update_system,
                session_event_system,
                session_reset_system,
            )
                .chain()
                .in_set(FrameSet::Session),
        );
    }
}
