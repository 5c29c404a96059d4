//! Attack detection and square checking
//!
//! Provides functions to check if squares are under attack and if kings are in check.
//! This module is critical for move legality validation and castling validation.
//!
//! ## Algorithm
//!
//! To check if a square is attacked, we iterate through all pieces of the
//! attacking color and verify if any can reach the target square:
//! - Knights and kings compare row/column distances
//! - Pawns look at the two squares diagonally forward for their color
//! - Sliding pieces ray-cast toward the target; the first occupied square
//!   along a ray stops it
//!
//! This is O(64 × rays) per call. It is only used during interactive move
//! selection, never inside a search loop, so no attack maps are cached.

use crate::board::*;
use crate::constants::*;
use crate::types::*;

/// Check if a square is under attack by pieces of the specified color
///
/// The target square's own occupant is irrelevant: a square holding a piece
/// of `by_color` can still be "attacked" (defended) by its neighbours.
///
/// # Examples
///
/// ```rust,ignore
/// // Is e4 covered by any Black piece?
/// let attacked = is_square_attacked(&position.board, 36, Color::Black);
/// ```
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == by_color)
        .any(|(from, piece)| piece_attacks(board, from, piece, square))
}

/// Whether `piece` standing on `from` attacks `target`
fn piece_attacks(board: &Board, from: Square, piece: Piece, target: Square) -> bool {
    if from == target {
        return false;
    }
    match piece.kind {
        PieceKind::Knight => can_knight_attack(from, target),
        PieceKind::King => can_king_attack(from, target),
        PieceKind::Pawn => can_pawn_attack(from, target, piece.color),
        PieceKind::Bishop => can_ray_attack(board, from, target, &BISHOP_DIRS),
        PieceKind::Rook => can_ray_attack(board, from, target, &ROOK_DIRS),
        PieceKind::Queen => can_ray_attack(board, from, target, &QUEEN_DIRS),
    }
}

#[inline]
fn distances(from: Square, to: Square) -> (i8, i8) {
    (
        (row_of(to) - row_of(from)).abs(),
        (col_of(to) - col_of(from)).abs(),
    )
}

/// Knights attack in an L-shape (2+1 or 1+2 squares), ignoring blockers
fn can_knight_attack(from: Square, to: Square) -> bool {
    let (dr, dc) = distances(from, to);
    (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
}

/// Kings attack the 8 neighbouring squares
fn can_king_attack(from: Square, to: Square) -> bool {
    let (dr, dc) = distances(from, to);
    dr <= 1 && dc <= 1
}

/// Pawns attack the two squares diagonally forward in their color's direction
fn can_pawn_attack(from: Square, to: Square, color: Color) -> bool {
    row_of(to) - row_of(from) == color.pawn_direction() && (col_of(to) - col_of(from)).abs() == 1
}

/// Walk each ray from `from`; an occupied square ends the ray, and counts as
/// an attack only if it is the target itself
fn can_ray_attack(board: &Board, from: Square, target: Square, dirs: &[(i8, i8)]) -> bool {
    for &dir in dirs {
        let mut steps = 1;
        while let Some(square) = offset(from, dir, steps) {
            if square == target {
                return true;
            }
            if !board.is_empty(square) {
                break;
            }
            steps += 1;
        }
    }
    false
}

/// Check if the king of the specified color is in check
///
/// A board without a king of `color` is reported as not in check; this is a
/// defensive default for hand-built boards, not a rules outcome.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_square_attacked(board, king, color.opposite()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white(kind: PieceKind) -> Piece {
        Piece::new(kind, Color::White)
    }

    fn black(kind: PieceKind) -> Piece {
        Piece::new(kind, Color::Black)
    }

    #[test]
    fn test_pawn_attacks_diagonally_forward_only() {
        // White pawn on e4 (36) attacks d5 (27) and f5 (29)
        let board = Board::from_pieces(&[(36, white(PieceKind::Pawn))]);
        assert!(is_square_attacked(&board, 27, Color::White));
        assert!(is_square_attacked(&board, 29, Color::White));
        assert!(!is_square_attacked(&board, 28, Color::White), "not straight ahead");
        assert!(!is_square_attacked(&board, 43, Color::White), "not backwards");

        // Black pawn on e5 (28) attacks d4 (35) and f4 (37)
        let board = Board::from_pieces(&[(28, black(PieceKind::Pawn))]);
        assert!(is_square_attacked(&board, 35, Color::Black));
        assert!(is_square_attacked(&board, 37, Color::Black));
        assert!(!is_square_attacked(&board, 19, Color::Black));
    }

    #[test]
    fn test_pawn_on_edge_does_not_wrap() {
        // White pawn on a4 (32) must not attack h-file squares
        let board = Board::from_pieces(&[(32, white(PieceKind::Pawn))]);
        assert!(is_square_attacked(&board, 25, Color::White));
        assert!(!is_square_attacked(&board, 23, Color::White));
        assert!(!is_square_attacked(&board, 31, Color::White));
    }

    #[test]
    fn test_knight_attack_pattern() {
        // Knight on d4 (35)
        let board = Board::from_pieces(&[(35, black(PieceKind::Knight))]);
        let attacked: Vec<Square> = (0..64)
            .filter(|&sq| is_square_attacked(&board, sq, Color::Black))
            .collect();
        assert_eq!(attacked, vec![18, 20, 25, 29, 41, 45, 50, 52]);
    }

    #[test]
    fn test_slider_blocked_by_first_piece() {
        // Rook a1 (56), blocker a4 (32): a2, a3, a4 attacked, a5 not
        let board = Board::from_pieces(&[
            (56, white(PieceKind::Rook)),
            (32, black(PieceKind::Knight)),
        ]);
        assert!(is_square_attacked(&board, 48, Color::White));
        assert!(is_square_attacked(&board, 40, Color::White));
        assert!(is_square_attacked(&board, 32, Color::White));
        assert!(!is_square_attacked(&board, 24, Color::White));
        assert!(is_square_attacked(&board, 63, Color::White), "open first rank");
    }

    #[test]
    fn test_bishop_and_queen_diagonals() {
        // Bishop c1 (58) along c1-h6, queen h8 (7) along the long diagonal
        let board = Board::from_pieces(&[
            (58, white(PieceKind::Bishop)),
            (7, black(PieceKind::Queen)),
        ]);
        assert!(is_square_attacked(&board, 23, Color::White), "h6");
        assert!(!is_square_attacked(&board, 50, Color::White), "c2 is not diagonal");
        assert!(is_square_attacked(&board, 56, Color::Black), "a1 on the long diagonal");
        assert!(is_square_attacked(&board, 0, Color::Black), "a8 along the rank");
    }

    #[test]
    fn test_is_in_check() {
        let board = Board::from_pieces(&[
            (60, white(PieceKind::King)),
            (4, black(PieceKind::Rook)),
        ]);
        assert!(is_in_check(&board, Color::White));

        let blocked = board.with(52, Some(white(PieceKind::Pawn)));
        assert!(!is_in_check(&blocked, Color::White));
    }

    #[test]
    fn test_missing_king_is_not_in_check() {
        let board = Board::from_pieces(&[(4, black(PieceKind::Queen))]);
        assert!(!is_in_check(&board, Color::White));
    }
}
