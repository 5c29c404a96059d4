//! Rook move generation
//!
//! Rooks are sliding pieces that move along ranks and files until blocked.
//! Castling is generated from the king's side, see [`super::king`].

use super::sliding;
use crate::board::Board;
use crate::constants::ROOK_DIRS;
use crate::types::*;

/// Generate rook moves from a given square
pub fn generate_rook_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(board, from, color, &ROOK_DIRS, moves);
}
