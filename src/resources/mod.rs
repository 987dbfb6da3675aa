mod config;
mod input;
pub mod session;

pub use config::{GameConfig, HandInputConfig, PhysicsConfig, SimConfig};
pub use input::{ClassicAxes, HandAxes, HandPose, HandTracking, InputRouter, RoutedControls};
pub use session::{
    Chirality, GameOverReason, GameSession, GameState, GameStateChanged, RetryTarget,
    SessionAnchor,
};
