//! UCI move codec
//!
//! External engines answer with long-algebraic tokens: two squares and an
//! optional promotion letter (`e2e4`, `e1g1`, `e7e8q`). The token does not say
//! whether a move castles or captures en passant, so [`parse_uci_move`]
//! re-derives those flags from the position the engine was given.
//!
//! A token that does not match the grammar is a contract violation by the
//! engine process and is reported as [`ChessEngineError::MalformedUciMove`].

use crate::board::{col_of, parse_square, row_of, square_name};
use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::position::Position;
use crate::types::*;

/// Decode an engine move token against the position it was computed for
///
/// Derived flags:
/// - **castling**: a King moving from its start square to one of its two
///   castling destinations
/// - **en passant**: a Pawn moving one file diagonally onto the current
///   en-passant target, which must be empty
/// - **promotion**: a fifth letter (`q r b n`), or a Pawn reaching its last
///   row without one (promotes to a Queen when applied)
///
/// # Examples
///
/// ```rust,ignore
/// let mv = parse_uci_move("e1g1", &position)?;
/// assert!(mv.is_castle_king_side);
/// ```
pub fn parse_uci_move(token: &str, position: &Position) -> ChessEngineResult<Move> {
    let malformed = |reason: &str| ChessEngineError::MalformedUciMove {
        token: token.to_string(),
        reason: reason.to_string(),
    };

    if !token.is_ascii() || !(4..=5).contains(&token.len()) {
        return Err(malformed("expected 4 or 5 ASCII characters"));
    }

    let from = parse_square(&token[0..2]).map_err(|_| malformed("bad from-square"))?;
    let to = parse_square(&token[2..4]).map_err(|_| malformed("bad to-square"))?;

    let promotion_piece = match token[4..].chars().next() {
        None => None,
        Some(letter) => Some(parse_promotion_letter(letter).map_err(|_| {
            malformed("promotion letter must be one of q, r, b, n")
        })?),
    };

    let board = &position.board;
    let mut mv = Move::new(from, to);

    match board.piece_at(from) {
        Some(piece) if piece.kind == PieceKind::King => {
            let color = piece.color;
            if from == king_start(color) {
                mv.is_castle_king_side = to == king_side_castle(color);
                mv.is_castle_queen_side = to == queen_side_castle(color);
            }
        }
        Some(piece) if piece.kind == PieceKind::Pawn => {
            mv.is_en_passant = position.en_passant == Some(to)
                && board.is_empty(to)
                && (col_of(to) - col_of(from)).abs() == 1;
            mv.is_promotion =
                promotion_piece.is_some() || row_of(to) == piece.color.promotion_row();
        }
        _ => {}
    }

    if promotion_piece.is_some() {
        mv.is_promotion = true;
        mv.promotion_piece = promotion_piece;
    }

    Ok(mv)
}

/// `q r b n` to the promotion piece kind
pub fn parse_promotion_letter(letter: char) -> ChessEngineResult<PieceKind> {
    match letter {
        'q' => Ok(PieceKind::Queen),
        'r' => Ok(PieceKind::Rook),
        'b' => Ok(PieceKind::Bishop),
        'n' => Ok(PieceKind::Knight),
        _ => Err(ChessEngineError::InvalidPromotion { letter }),
    }
}

/// Encode a move as a UCI token (`e7e8q` when a promotion piece is set)
pub fn move_to_uci(mv: &Move) -> String {
    let mut token = square_name(mv.from);
    token.push_str(&square_name(mv.to));
    if let Some(kind) = mv.promotion_piece {
        token.push(kind.fen_char());
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_move_has_no_flags() {
        let mv = parse_uci_move("e2e4", &Position::initial()).expect("valid token");
        assert_eq!(mv, Move::new(52, 36));
    }

    #[test]
    fn test_castling_flags_are_derived() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        assert!(parse_uci_move("e1g1", &position).unwrap().is_castle_king_side);
        assert!(parse_uci_move("e1c1", &position).unwrap().is_castle_queen_side);

        let black = Position {
            side_to_move: Color::Black,
            ..position
        };
        assert!(parse_uci_move("e8g8", &black).unwrap().is_castle_king_side);
        assert!(parse_uci_move("e8c8", &black).unwrap().is_castle_queen_side);

        let step = parse_uci_move("e1f1", &position).unwrap();
        assert!(!step.is_castle());
    }

    #[test]
    fn test_rook_on_castle_squares_is_not_castling() {
        // A rook travelling e1 -> g1 is just a rook move
        let position = Position::from_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1").unwrap();
        let mv = parse_uci_move("e1g1", &position).unwrap();
        assert!(!mv.is_castle());
    }

    #[test]
    fn test_en_passant_flag_is_derived() {
        let position =
            Position::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1")
                .unwrap();
        let mv = parse_uci_move("e5d6", &position).unwrap();
        assert!(mv.is_en_passant);

        let push = parse_uci_move("e5e6", &position).unwrap();
        assert!(!push.is_en_passant);
    }

    #[test]
    fn test_promotion_letter() {
        let position = Position::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
        let mv = parse_uci_move("e7e8n", &position).unwrap();
        assert!(mv.is_promotion);
        assert_eq!(mv.promotion_piece, Some(PieceKind::Knight));

        let implicit = parse_uci_move("e7e8", &position).unwrap();
        assert!(implicit.is_promotion);
        assert_eq!(implicit.promotion_piece, None);
    }

    #[test]
    fn test_malformed_tokens_fail_loudly() {
        let position = Position::initial();
        for bad in ["", "e2", "e2e", "e2e4qq", "z2e4", "e9e4", "e2e4k", "e2e4x", "é2e4"] {
            assert!(
                matches!(
                    parse_uci_move(bad, &position),
                    Err(ChessEngineError::MalformedUciMove { .. })
                ),
                "`{bad}` should be rejected"
            );
        }
    }

    #[test]
    fn test_move_to_uci() {
        assert_eq!(move_to_uci(&Move::new(52, 36)), "e2e4");
        assert_eq!(
            move_to_uci(&Move::promotion(12, 4).with_promotion(PieceKind::Rook)),
            "e7e8r"
        );
    }
}
