//! Legality filter
//!
//! A pseudo-legal candidate is legal when, after playing it on a throwaway
//! copy of the position, the mover's own king is not attacked. That single
//! test covers pinned pieces, blocking or capturing a checker, king steps into
//! attacked squares, en-passant discovered checks and the castling landing
//! square. No pin tables are kept.
//!
//! The cost is one simulated [`apply_move`] per candidate, which is fine for
//! interactive use.

use super::attack::is_in_check;
use super::generate_pseudo_moves;
use crate::api::apply_move;
use crate::position::Position;
use crate::types::*;

/// Legal moves of the piece standing on `from`
///
/// Returns an empty list if `piece` does not belong to the side to move.
/// `from` must be in `0..64`.
pub fn generate_legal_moves(from: Square, piece: Piece, position: &Position) -> Vec<Move> {
    if piece.color != position.side_to_move {
        return Vec::new();
    }
    generate_pseudo_moves(from, piece, position)
        .into_iter()
        .filter(|mv| leaves_king_safe(position, mv, piece.color))
        .collect()
}

/// Simulate `mv` and test the mover's king in the successor
#[inline]
fn leaves_king_safe(position: &Position, mv: &Move, mover: Color) -> bool {
    let successor = apply_move(position, mv);
    !is_in_check(&successor.board, mover)
}

/// Every legal move for the side to move, in square order
pub fn legal_moves_for_side(position: &Position) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, piece) in position.board.pieces() {
        if piece.color == position.side_to_move {
            moves.extend(generate_legal_moves(from, piece, position));
        }
    }
    moves
}

/// Whether the side to move has at least one legal move
///
/// Stops at the first piece with a non-empty legal move list.
pub fn has_any_legal_move(position: &Position) -> bool {
    position
        .board
        .pieces()
        .filter(|(_, piece)| piece.color == position.side_to_move)
        .any(|(from, piece)| !generate_legal_moves(from, piece, position).is_empty())
}
