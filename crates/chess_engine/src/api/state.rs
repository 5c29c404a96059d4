//! Game state queries
//!
//! Derives the [`GameStatus`] of the side to move.

use crate::move_gen::{has_any_legal_move, is_in_check};
use crate::position::Position;
use crate::types::*;

/// Status of the game for `position.side_to_move`
///
/// | legal move exists | in check | status |
/// |---|---|---|
/// | no  | yes | Checkmate |
/// | no  | no  | Stalemate |
/// | yes | yes | Check |
/// | yes | no  | Playing |
pub fn game_status(position: &Position) -> GameStatus {
    let in_check = is_in_check(&position.board, position.side_to_move);
    let has_legal_moves = has_any_legal_move(position);

    match (has_legal_moves, in_check) {
        (false, true) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Playing,
    }
}
