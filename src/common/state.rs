//! Global state machine.
//!
//! Level entities carry `DespawnOnExit(GameState::InGame)`, and every gameplay
//! system is gated on `in_state(GameState::InGame)`.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    /// The level is loaded and running.
    #[default]
    InGame,
}
