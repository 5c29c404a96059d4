//! King move generation
//!
//! Handles king-specific move generation. Kings move one square in any direction
//! (horizontally, vertically, or diagonally), and may castle.
//!
//! ## King Movement Rules
//!
//! - Kings move one square in any direction (8 possible destinations)
//! - Cannot move to squares occupied by own pieces
//! - Cannot move to squares attacked by opponent pieces (handled by the legality filter)
//! - Can capture opponent pieces on destination squares
//!
//! ## Castling
//!
//! A castling candidate is offered only when all of these hold:
//! - the matching castling right is still held
//! - the king stands on its start square and the rook on its canonical origin
//! - every square strictly between king and rook is empty
//! - the king is not currently in check
//! - none of the squares the king crosses is attacked
//!
//! The transit test happens here rather than in the legality filter: the
//! filter simulates the move and only looks at the king's final square, so it
//! cannot see a rook or bishop covering the square the king passes over.

use super::attack::{is_in_check, is_square_attacked};
use super::knight::generate_step_moves;
use crate::board::*;
use crate::constants::*;
use crate::position::Position;
use crate::types::*;

/// Generate king moves from a given square, castling included
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_king_moves(&position, 60, Color::White, &mut moves);
/// // Moves now contains all king steps from e1 plus any available castling
/// ```
pub fn generate_king_moves(position: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    generate_step_moves(&position.board, from, color, &KING_DIRS, moves);
    generate_castling_moves(position, from, color, moves);
}

fn generate_castling_moves(position: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    let rights = position.castling;
    if from != king_start(color) || !(rights.king_side(color) || rights.queen_side(color)) {
        return;
    }

    let board = &position.board;
    if is_in_check(board, color) {
        return;
    }

    let row = color.back_row();
    let rook = Piece::new(PieceKind::Rook, color);
    let opponent = color.opposite();
    let square = |col: i8| square_at(row, col).unwrap_or(from);
    let all_empty = |cols: &[i8]| cols.iter().all(|&c| board.is_empty(square(c)));
    let all_safe = |cols: &[i8]| {
        cols.iter()
            .all(|&c| !is_square_attacked(board, square(c), opponent))
    };

    // King-side: f and g empty, king crosses f and lands on g
    if rights.king_side(color)
        && board.holds(king_side_rook(color), rook)
        && all_empty(&[5, 6])
        && all_safe(&[5, 6])
    {
        moves.push(Move::castle_king_side(from, king_side_castle(color)));
    }

    // Queen-side: b, c and d empty, king crosses d and lands on c (b may be attacked)
    if rights.queen_side(color)
        && board.holds(queen_side_rook(color), rook)
        && all_empty(&[1, 2, 3])
        && all_safe(&[3, 2])
    {
        moves.push(Move::castle_queen_side(from, queen_side_castle(color)));
    }
}
