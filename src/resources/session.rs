use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::SpatialComponent;
use crate::resources::GameConfig;

/// The aircraft's session-start pose. Distance scoring measures from it and
/// a retry restores it.
#[derive(Resource, Debug, Clone, Default)]
pub struct SessionAnchor {
    pub start: SpatialComponent,
}

/// Left-or-right handedness selector used to pick which tracked hand
/// drives control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Chirality {
    Left,
    Right,
}

/// Top-level session state. Exactly one state is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    HandSelection,
    Countdown,
    Playing,
    Paused,
    GameOver,
}

/// Why the session ended. Win and lose outcomes share the `GameOver`
/// state but stay distinguishable for scoring and UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    OutOfFuel,
    CourseComplete,
    Custom(String),
}

impl GameOverReason {
    pub fn is_win(&self) -> bool {
        matches!(self, GameOverReason::CourseComplete)
    }

    pub fn message(&self) -> &str {
        match self {
            GameOverReason::OutOfFuel => "Out of fuel!",
            GameOverReason::CourseComplete => "Course complete!",
            GameOverReason::Custom(message) => message,
        }
    }
}

/// Where a retry lands: the full hand-selection flow, or straight back
/// into play for the simplified variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetryTarget {
    HandSelection,
    Playing,
}

/// Event emitted whenever the session changes state.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStateChanged {
    pub from: GameState,
    pub to: GameState,
}

/// The one authoritative owner of fuel, score, and session state.
///
/// Every collaborator (flight dynamics, world triggers, the UI layer)
/// holds a handle to this resource; there is no global lookup. Calls made
/// in the wrong state are silent no-ops, which makes late calls from
/// decoupled triggers harmless and guards the machine against reentrant
/// transitions.
#[derive(Resource, Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    state: GameState,
    fuel: f64,
    score: f64,
    selected_hand: Option<Chirality>,
    outcome: Option<GameOverReason>,
    countdown_remaining: f64,
    status: String,
    pending_reset: bool,
    transitions: Vec<GameStateChanged>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let fuel = config.starting_fuel.clamp(0.0, config.max_fuel);
        let mut session = Self {
            config,
            state: GameState::HandSelection,
            fuel,
            score: 0.0,
            selected_hand: None,
            outcome: None,
            countdown_remaining: 0.0,
            status: String::new(),
            pending_reset: false,
            transitions: Vec::new(),
        };
        session.enter_state(GameState::HandSelection);
        session
    }

    // =======================
    // Accessors for the UI layer
    // =======================

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    pub fn max_fuel(&self) -> f64 {
        self.config.max_fuel
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn selected_hand(&self) -> Option<Chirality> {
        self.selected_hand
    }

    pub fn outcome(&self) -> Option<&GameOverReason> {
        self.outcome.as_ref()
    }

    pub fn countdown_remaining(&self) -> f64 {
        self.countdown_remaining
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn distance_score_multiplier(&self) -> f64 {
        self.config.distance_score_multiplier
    }

    // =======================
    // Per-frame update
    // =======================

    /// Advance timed behaviour by `dt` seconds. Drives the countdown and
    /// the defensive out-of-fuel check; all other states hold.
    pub fn tick(&mut self, dt: f64) {
        match self.state {
            GameState::Countdown => {
                self.countdown_remaining -= dt;
                self.status = format!("Starting in {}", self.countdown_remaining.ceil().max(0.0));
                if self.countdown_remaining <= 0.0 {
                    self.enter_state(GameState::Playing);
                }
            }
            GameState::Playing => {
                if self.fuel <= 0.0 {
                    self.trigger_game_over(GameOverReason::OutOfFuel);
                }
            }
            _ => {}
        }
    }

    // =======================
    // Gameplay mutations
    // =======================

    /// Burn `amount` of fuel. No-op outside `Playing`; clamps at zero and
    /// ends the session the moment the tank runs dry.
    pub fn consume_fuel(&mut self, amount: f64) {
        if self.state != GameState::Playing {
            return;
        }

        self.fuel = (self.fuel - amount.max(0.0)).max(0.0);
        if self.fuel <= 0.0 {
            self.trigger_game_over(GameOverReason::OutOfFuel);
        }
    }

    /// Award fuel from a checkpoint, clamped at capacity, plus the fixed
    /// per-checkpoint score bonus. Never ends the session.
    pub fn add_fuel(&mut self, amount: f64) {
        if self.state != GameState::Playing {
            return;
        }

        self.fuel = (self.fuel + amount.max(0.0)).clamp(0.0, self.config.max_fuel);
        self.score += self.config.score_per_checkpoint;
        self.status = "Checkpoint!".to_string();
    }

    /// Add distance-based score. No-op outside `Playing`.
    pub fn accrue_distance_score(&mut self, delta: f64) {
        if self.state != GameState::Playing {
            return;
        }
        self.score += delta.max(0.0);
    }

    /// End the session. Idempotent: once in `GameOver` further triggers
    /// are ignored, so fuel exhaustion and the win trigger cannot race.
    pub fn trigger_game_over(&mut self, reason: GameOverReason) {
        if self.state == GameState::GameOver {
            return;
        }

        info!("Game over: {}", reason.message());
        self.status = reason.message().to_string();
        self.outcome = Some(reason);
        self.enter_state(GameState::GameOver);
    }

    /// Restart the session after a game over. Resets all owned state to
    /// the session start; a pending reset flag tells the host to restore
    /// the aircraft spawn pose.
    pub fn request_retry(&mut self) {
        if self.state != GameState::GameOver {
            return;
        }

        self.fuel = self.config.starting_fuel.clamp(0.0, self.config.max_fuel);
        self.score = 0.0;
        self.outcome = None;
        self.pending_reset = true;

        match self.config.retry_target {
            RetryTarget::HandSelection => self.enter_state(GameState::HandSelection),
            RetryTarget::Playing => self.enter_state(GameState::Playing),
        }
    }

    /// Record the chosen hand and start the countdown. Valid only from
    /// `HandSelection`; later calls before a reset are ignored.
    pub fn select_hand(&mut self, hand: Chirality) {
        if self.state != GameState::HandSelection || self.selected_hand.is_some() {
            return;
        }

        info!("Selected hand: {:?}", hand);
        self.selected_hand = Some(hand);
        self.enter_state(GameState::Countdown);
    }

    /// Freeze the per-frame update. Valid only from `Playing`.
    pub fn pause(&mut self) {
        if self.state == GameState::Playing {
            self.enter_state(GameState::Paused);
        }
    }

    /// Resume from a pause. Valid only from `Paused`.
    pub fn resume(&mut self) {
        if self.state == GameState::Paused {
            self.enter_state(GameState::Playing);
        }
    }

    // =======================
    // Host hooks
    // =======================

    /// True exactly once after a retry; the session system uses it to
    /// restore the aircraft spawn pose.
    pub fn take_pending_reset(&mut self) -> bool {
        std::mem::take(&mut self.pending_reset)
    }

    /// Drain state transitions recorded since the last call, oldest first.
    pub fn drain_transitions(&mut self) -> Vec<GameStateChanged> {
        std::mem::take(&mut self.transitions)
    }

    // =======================
    // State management
    // =======================

    fn enter_state(&mut self, next: GameState) {
        let previous = self.state;
        self.state = next;
        if previous != next {
            debug!("State change: {:?} -> {:?}", previous, next);
            self.transitions.push(GameStateChanged {
                from: previous,
                to: next,
            });
        }

        match next {
            GameState::HandSelection => {
                self.selected_hand = None;
                self.status = "Select your hand".to_string();
            }
            GameState::Countdown => {
                self.countdown_remaining = self.config.countdown_duration;
            }
            GameState::Playing => {
                self.status = "Fly through the fuel rings!".to_string();
            }
            GameState::Paused | GameState::GameOver => {}
        }
    }
}
