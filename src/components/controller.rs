use bevy::prelude::*;

/// Marker for the player-controlled aircraft entity.
#[derive(Component, Debug, Default)]
pub struct PlayerController;
