//! Queen move generation
//!
//! Queens combine the movement patterns of bishops and rooks.

use super::bishop;
use super::rook;
use crate::board::Board;
use crate::types::*;

/// Generate queen moves from a given square
///
/// Queens move like both bishop and rook, so this appends both patterns.
pub fn generate_queen_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    bishop::generate_bishop_moves(board, from, color, moves);
    rook::generate_rook_moves(board, from, color, moves);
}
