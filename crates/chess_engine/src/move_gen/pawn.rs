//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures
//! - En passant
//! - Promotion flagging (the piece is chosen when the move is committed)
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent, onto an empty square
//! - **Double push**: from the starting row only, both squares must be empty
//! - **Captures**: one square diagonally forward, onto an opponent piece
//! - **En passant**: diagonally onto the current en-passant target, which is
//!   empty on the board but treated as a capture
//! - **Promotion**: any move onto the last row is flagged `is_promotion`; one
//!   move per destination is emitted so destination-keyed move maps stay maps

use crate::board::*;
use crate::position::Position;
use crate::types::*;

/// Generate pawn moves from a given square
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_pawn_moves(&position, 52, Color::White, &mut moves);
/// // Moves now contains e2-e3, e2-e4, and any diagonal captures
/// ```
pub fn generate_pawn_moves(position: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    let board = &position.board;
    let dir = color.pawn_direction();
    let row = row_of(from);
    let col = col_of(from);

    let push = |moves: &mut Vec<Move>, to: Square| {
        if row_of(to) == color.promotion_row() {
            moves.push(Move::promotion(from, to));
        } else {
            moves.push(Move::new(from, to));
        }
    };

    // Forward pushes
    if let Some(one) = square_at(row + dir, col) {
        if board.is_empty(one) {
            push(moves, one);

            if row == color.pawn_start_row() {
                if let Some(two) = square_at(row + 2 * dir, col) {
                    if board.is_empty(two) {
                        moves.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    // Diagonal captures and en passant
    for dc in [-1, 1] {
        let Some(to) = square_at(row + dir, col + dc) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.color != color => push(moves, to),
            Some(_) => {}
            None if position.en_passant == Some(to) && is_en_passant_row(to, color) => {
                moves.push(Move::en_passant(from, to));
            }
            None => {}
        }
    }
}

/// The en-passant target sits on the row the opponent's pawn skipped:
/// row 2 (rank 6) when White captures, row 5 (rank 3) when Black captures
#[inline]
fn is_en_passant_row(target: Square, color: Color) -> bool {
    row_of(target) == color.opposite().pawn_start_row() + color.opposite().pawn_direction()
}
