//! Move generation
//!
//! Two layers:
//! - **Pseudo-legal** generation per piece type ([`generate_pseudo_moves`]):
//!   obeys movement patterns and occupancy, ignores self-check. Castling
//!   candidates are the one exception and are already checked for
//!   "not in check / not crossing an attacked square" here.
//! - **Legal** filtering ([`generate_legal_moves`]): simulate each candidate,
//!   drop those that leave the mover's king attacked.
//!
//! ## Module Organization
//!
//! - `attack` - Square attack and check detection
//! - `sliding` / `bishop` / `rook` / `queen` - Ray walkers
//! - `knight` / `king` - Fixed offset tables (king adds castling)
//! - `pawn` - Pushes, captures, en passant, promotion flag
//! - `legal` - Simulate-then-test filter

pub mod attack;
pub mod bishop;
pub mod king;
pub mod knight;
pub mod legal;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;


pub use attack::{is_in_check, is_square_attacked};
pub use legal::{generate_legal_moves, has_any_legal_move, legal_moves_for_side};

use crate::position::Position;
use crate::types::*;

/// Pseudo-legal candidates for `piece` standing on `from`, dispatched by type
///
/// # Examples
///
/// ```rust,ignore
/// let position = Position::initial();
/// let knight = position.board.piece_at(57).unwrap();
/// let moves = generate_pseudo_moves(57, knight, &position);
/// assert_eq!(moves.len(), 2);
/// ```
pub fn generate_pseudo_moves(from: Square, piece: Piece, position: &Position) -> Vec<Move> {
    let mut moves = Vec::with_capacity(28);
    let board = &position.board;
    let color = piece.color;

    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(position, from, color, &mut moves),
        PieceKind::Knight => knight::generate_knight_moves(board, from, color, &mut moves),
        PieceKind::Bishop => bishop::generate_bishop_moves(board, from, color, &mut moves),
        PieceKind::Rook => rook::generate_rook_moves(board, from, color, &mut moves),
        PieceKind::Queen => queen::generate_queen_moves(board, from, color, &mut moves),
        PieceKind::King => king::generate_king_moves(position, from, color, &mut moves),
    }

    moves
}
