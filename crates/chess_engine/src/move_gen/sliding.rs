//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces can move multiple squares in a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction vector we walk outward from the source square:
//! 1. Empty squares are always valid destinations
//! 2. The first occupied square ends the ray
//! 3. That square is a valid destination only if it holds an opponent piece
//!
//! ## Performance
//!
//! - **Time complexity**: O(n) in the number of reachable squares
//! - **Typical moves per square**: 14 for rooks, up to 13 for bishops, up to 27 for queens

use crate::board::*;
use crate::types::*;

/// Generate moves for a sliding piece along the given directions
///
/// # Examples
///
/// ```rust,ignore
/// // Rook moves from a1
/// let mut moves = Vec::new();
/// generate_sliding_moves(&position.board, 56, Color::White, &ROOK_DIRS, &mut moves);
/// ```
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &dir in dirs {
        let mut steps = 1;
        while let Some(to) = offset(from, dir, steps) {
            match board.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(piece) => {
                    if piece.color != color {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
            steps += 1;
        }
    }
}
