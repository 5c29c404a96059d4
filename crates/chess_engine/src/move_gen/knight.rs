//! Knight move generation
//!
//! Knights move in an L-shape pattern: 2 squares in one direction, then 1
//! square perpendicular (or vice versa).
//!
//! ## Knight Movement Rules
//!
//! - Knights can jump over pieces (unlike sliding pieces)
//! - 8 possible destinations from most squares (fewer near edges)
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use crate::board::*;
use crate::constants::KNIGHT_JUMPS;
use crate::types::*;

/// Generate knight moves from a given square
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_knight_moves(&position.board, 57, Color::White, &mut moves);
/// // Moves now contains b1-a3 and b1-c3
/// ```
pub fn generate_knight_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    generate_step_moves(board, from, color, &KNIGHT_JUMPS, moves);
}

/// Single-step moves along a fixed offset table, filtered by board bounds
/// and "not onto own piece"
pub(crate) fn generate_step_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &delta in offsets {
        if let Some(to) = offset(from, delta, 1) {
            if !board.is_color(to, color) {
                moves.push(Move::new(from, to));
            }
        }
    }
}
