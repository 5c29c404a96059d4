//! Public API for the chess engine
//!
//! High-level operations on positions plus the interactive session the UI
//! layer drives.
//!
//! ## Module Organization
//!
//! - `moves` - State transition (apply_move)
//! - `state` - Game status for the side to move (game_status)
//! - `game` - Move-selection session (select a square, attempt a move)

mod game;
mod moves;
mod state;

#[cfg(test)]
mod tests;

pub use game::{GameSession, MoveOutcome};
pub use moves::apply_move;
pub use state::game_status;
