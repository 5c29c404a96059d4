//! Move execution (state transition)
//!
//! [`apply_move`] is a pure function `Position × Move → Position`. The input
//! position is never touched, which is what lets the legality filter simulate
//! candidates against the very position it is enumerating.

use crate::board::*;
use crate::constants::*;
use crate::position::Position;
use crate::types::*;

/// Apply one move, producing the successor position
///
/// Branches on the move kind:
/// - **Castling**: king to its destination, rook jumps to the square the king
///   crossed (king-side rook moves two files, queen-side three); both of the
///   mover's castling rights are revoked.
/// - **En passant**: pawn onto the empty target square; the captured pawn is
///   removed from the square one row behind the target, on the mover's side.
/// - **Normal move / capture**: piece relocates. Moving the king revokes both
///   rights, moving a rook off its origin revokes that side, and capturing a
///   rook on an origin square revokes the victim's right for that side.
///
/// Independently of the branch, the en-passant target is set behind a pawn
/// that just advanced two rows and cleared otherwise. A pawn landing on its
/// last row becomes `promotion_piece`, defaulting to a Queen.
///
/// The move is not validated: callers pass moves produced by the generator
/// (or checked against it). An empty `from` square returns the position
/// unchanged. Both squares must be in `0..64`.
///
/// # Examples
///
/// ```rust,ignore
/// let start = Position::initial();
/// let next = apply_move(&start, &Move::new(52, 36)); // e2e4
/// assert_eq!(next.en_passant, Some(44));             // e3
/// assert_eq!(next.side_to_move, Color::Black);
/// ```
pub fn apply_move(position: &Position, mv: &Move) -> Position {
    let Some(piece) = position.board.piece_at(mv.from) else {
        return *position;
    };
    let color = piece.color;

    let mut board = position.board;
    let mut castling = position.castling;

    if piece.kind == PieceKind::King && mv.is_castle() {
        board.relocate(mv.from, mv.to);
        let row = row_of(mv.to);
        let (rook_from, rook_to) = if mv.is_castle_king_side {
            (king_side_rook(color), square_at(row, 5))
        } else {
            (queen_side_rook(color), square_at(row, 3))
        };
        if let Some(rook_to) = rook_to {
            board.relocate(rook_from, rook_to);
        }
        castling = castling.without_color(color);
    } else if piece.kind == PieceKind::Pawn && mv.is_en_passant {
        board.relocate(mv.from, mv.to);
        let behind = color.opposite().pawn_direction();
        if let Some(captured) = offset(mv.to, (behind, 0), 1) {
            board.set(captured, None);
        }
    } else {
        let captured = board.relocate(mv.from, mv.to);

        match piece.kind {
            PieceKind::King => castling = castling.without_color(color),
            PieceKind::Rook => castling = revoke_for_rook_square(castling, mv.from),
            PieceKind::Pawn if row_of(mv.to) == color.promotion_row() => {
                let kind = mv
                    .promotion_piece
                    .filter(|k| k.is_promotion_target())
                    .unwrap_or(PieceKind::Queen);
                board.set(mv.to, Some(Piece::new(kind, color)));
            }
            _ => {}
        }

        if matches!(captured, Some(p) if p.kind == PieceKind::Rook) {
            castling = revoke_for_rook_square(castling, mv.to);
        }
    }

    let en_passant = if piece.kind == PieceKind::Pawn && (row_of(mv.to) - row_of(mv.from)).abs() == 2
    {
        square_at((row_of(mv.from) + row_of(mv.to)) / 2, col_of(mv.from))
    } else {
        None
    };

    Position {
        board,
        side_to_move: color.opposite(),
        castling,
        en_passant,
    }
}

/// Revoke the right tied to a canonical rook origin square, if `square` is one
fn revoke_for_rook_square(castling: CastlingRights, square: Square) -> CastlingRights {
    match square {
        WHITE_KING_SIDE_ROOK => castling.without_king_side(Color::White),
        WHITE_QUEEN_SIDE_ROOK => castling.without_queen_side(Color::White),
        BLACK_KING_SIDE_ROOK => castling.without_king_side(Color::Black),
        BLACK_QUEEN_SIDE_ROOK => castling.without_queen_side(Color::Black),
        _ => castling,
    }
}
