//! Tests for the state transition, game status and the selection session
//!
//! # Test Organization
//!
//! - `test_apply_*` - apply_move branches and bookkeeping
//! - `test_status_*` - game_status classification
//! - `test_session_*` - GameSession selection and commit flow

use super::*;
use crate::board::parse_square;
use crate::move_gen::legal_moves_for_side;
use crate::position::Position;
use crate::types::*;
use crate::uci::parse_uci_move;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).expect("test FEN should parse")
}

fn sq(name: &str) -> Square {
    parse_square(name).expect("test square should parse")
}

/// Apply a UCI token, flags derived from the position
fn play(position: &Position, token: &str) -> Position {
    let mv = parse_uci_move(token, position).expect("test token should parse");
    apply_move(position, &mv)
}

fn play_all(position: &Position, tokens: &[&str]) -> Position {
    tokens.iter().fold(*position, |p, token| play(&p, token))
}

const CASTLE_READY: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

// ============================================================================
// apply_move
// ============================================================================

#[test]
fn test_apply_pawn_push_sets_en_passant_target() {
    let start = Position::initial();
    let next = play(&start, "e2e4");

    assert_eq!(next.side_to_move, Color::Black);
    assert_eq!(next.en_passant, Some(sq("e3")));
    assert!(next.board.is_empty(sq("e2")));
    assert_eq!(
        next.board.piece_at(sq("e4")),
        Some(Piece::new(PieceKind::Pawn, Color::White))
    );
    assert_eq!(start, Position::initial(), "input position is untouched");
}

#[test]
fn test_apply_en_passant_target_lives_one_ply() {
    let after_d5 = play_all(&Position::initial(), &["g1f3", "d7d5"]);
    assert_eq!(after_d5.en_passant, Some(sq("d6")));

    let after_reply = play(&after_d5, "b1c3");
    assert_eq!(after_reply.en_passant, None);

    let single_step = play(&after_reply, "e7e6");
    assert_eq!(single_step.en_passant, None);
}

#[test]
fn test_apply_en_passant_removes_captured_pawn() {
    let position = pos("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    let next = apply_move(&position, &Move::en_passant(sq("e5"), sq("d6")));

    assert!(next.board.is_empty(sq("d5")), "captured pawn is gone");
    assert!(next.board.is_empty(sq("e5")));
    assert_eq!(
        next.board.piece_at(sq("d6")),
        Some(Piece::new(PieceKind::Pawn, Color::White))
    );
    assert_eq!(next.en_passant, None);
}

#[test]
fn test_apply_black_en_passant() {
    let position = pos("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1");
    let next = play(&position, "d4e3");

    assert!(next.board.is_empty(sq("e4")));
    assert!(next.board.is_empty(sq("d4")));
    assert_eq!(
        next.board.piece_at(sq("e3")),
        Some(Piece::new(PieceKind::Pawn, Color::Black))
    );
}

#[test]
fn test_apply_castle_king_side_moves_rook() {
    let next = play(&pos(CASTLE_READY), "e1g1");

    assert_eq!(
        next.board.piece_at(sq("g1")),
        Some(Piece::new(PieceKind::King, Color::White))
    );
    assert_eq!(
        next.board.piece_at(sq("f1")),
        Some(Piece::new(PieceKind::Rook, Color::White))
    );
    assert!(next.board.is_empty(sq("e1")));
    assert!(next.board.is_empty(sq("h1")));

    assert!(!next.castling.white_king_side);
    assert!(!next.castling.white_queen_side);
    assert!(next.castling.black_king_side);
    assert!(next.castling.black_queen_side);
}

#[test]
fn test_apply_castle_queen_side_moves_rook() {
    let position = pos("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    let next = play(&position, "e8c8");

    assert_eq!(
        next.board.piece_at(sq("c8")),
        Some(Piece::new(PieceKind::King, Color::Black))
    );
    assert_eq!(
        next.board.piece_at(sq("d8")),
        Some(Piece::new(PieceKind::Rook, Color::Black))
    );
    assert!(next.board.is_empty(sq("a8")));
    assert!(next.board.is_empty(sq("b8")));
    assert!(!next.castling.black_king_side);
    assert!(!next.castling.black_queen_side);
    assert!(next.castling.white_king_side && next.castling.white_queen_side);
}

#[test]
fn test_apply_king_move_revokes_rights_for_good() {
    //! Walking the king out and back does not restore castling
    let next = play_all(&pos(CASTLE_READY), &["e1f1", "e8d8", "f1e1", "d8e8"]);

    assert_eq!(next.castling, CastlingRights::NONE);
    let king = next.board.piece_at(sq("e1")).unwrap();
    assert!(crate::move_gen::generate_legal_moves(sq("e1"), king, &next)
        .iter()
        .all(|mv| !mv.is_castle()));
}

#[test]
fn test_apply_rook_move_revokes_one_side() {
    let next = play(&pos(CASTLE_READY), "h1h2");
    assert!(!next.castling.white_king_side);
    assert!(next.castling.white_queen_side);

    let back = play_all(&next, &["a8a7", "h2h1"]);
    assert!(!back.castling.white_king_side, "rights never come back");
    assert!(!back.castling.black_queen_side);
}

#[test]
fn test_apply_capturing_rook_revokes_victim_right() {
    let next = play(&pos(CASTLE_READY), "a1a8");

    assert!(!next.castling.black_queen_side, "captured rook's right");
    assert!(!next.castling.white_queen_side, "moved rook's right");
    assert!(next.castling.black_king_side);
    assert!(next.castling.white_king_side);
}

#[test]
fn test_apply_promotion_defaults_to_queen() {
    let position = pos("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let next = apply_move(&position, &Move::promotion(sq("a7"), sq("a8")));
    assert_eq!(
        next.board.piece_at(sq("a8")),
        Some(Piece::new(PieceKind::Queen, Color::White))
    );
}

#[test]
fn test_apply_promotion_honours_choice() {
    let position = pos("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let knight = Move::promotion(sq("a7"), sq("b8")).with_promotion(PieceKind::Knight);
    let next = apply_move(&position, &knight);

    assert_eq!(
        next.board.piece_at(sq("b8")),
        Some(Piece::new(PieceKind::Knight, Color::White))
    );
    assert!(next.board.is_empty(sq("a7")));
}

#[test]
fn test_apply_black_promotion() {
    let position = pos("4k3/8/8/8/8/8/7p/K7 b - - 0 1");
    let next = play(&position, "h2h1r");
    assert_eq!(
        next.board.piece_at(sq("h1")),
        Some(Piece::new(PieceKind::Rook, Color::Black))
    );
}

// ============================================================================
// game_status
// ============================================================================

const FOOLS_MATE: [&str; 4] = ["f2f3", "e7e5", "g2g4", "d8h4"];

#[test]
fn test_status_initial_is_playing() {
    assert_eq!(game_status(&Position::initial()), GameStatus::Playing);
}

#[test]
fn test_status_fools_mate() {
    let mated = play_all(&Position::initial(), &FOOLS_MATE);

    assert_eq!(mated.side_to_move, Color::White);
    assert_eq!(game_status(&mated), GameStatus::Checkmate);
    assert!(legal_moves_for_side(&mated).is_empty());
}

#[test]
fn test_status_back_rank_mate() {
    let position = pos("4k3/8/8/8/8/8/3PPP2/r3K3 w - - 0 1");
    assert_eq!(game_status(&position), GameStatus::Checkmate);
}

#[test]
fn test_status_stalemate() {
    //! Black king on a8 boxed in by the pawn on a7 and the king on b6
    let position = pos("k7/P7/1K6/8/8/8/8/8 b - - 0 1");
    assert_eq!(game_status(&position), GameStatus::Stalemate);
    assert!(game_status(&position).is_terminal());
}

#[test]
fn test_status_check_with_escape() {
    let position = pos("4k3/8/8/8/8/8/8/4RK2 b - - 0 1");
    assert_eq!(game_status(&position), GameStatus::Check);
    assert!(!game_status(&position).is_terminal());
}

// ============================================================================
// GameSession
// ============================================================================

#[test]
fn test_session_select_offers_legal_moves() {
    let mut session = GameSession::new();
    let offered: Vec<Square> = session.select_square(sq("e2")).keys().copied().collect();

    let mut expected = vec![sq("e3"), sq("e4")];
    expected.sort_unstable();
    assert_eq!(offered, expected);
    assert_eq!(session.selected(), Some(sq("e2")));
}

#[test]
fn test_session_select_rejects_empty_and_opponent_squares() {
    let mut session = GameSession::new();
    assert!(session.select_square(sq("e4")).is_empty());
    assert!(session.select_square(sq("e7")).is_empty());
    assert_eq!(session.selected(), None);
    assert!(session.select_square(64).is_empty());
}

#[test]
fn test_session_reselect_deselects() {
    let mut session = GameSession::new();
    session.select_square(sq("g1"));
    assert!(session.select_square(sq("g1")).is_empty());
    assert_eq!(session.selected(), None);
}

#[test]
fn test_session_clear_then_select_after_rejected_attempt() {
    let mut session = GameSession::new();
    session.select_square(sq("e2"));
    assert!(session.attempt_move(sq("e5")).is_none());
    assert_eq!(session.selected(), Some(sq("e2")));

    session.clear_selection();
    assert_eq!(session.selected(), None);
    assert!(session.offered_moves().is_empty());

    assert_eq!(session.select_square(sq("e2")).len(), 2);
    assert!(session.attempt_move(sq("e4")).is_some());
}

#[test]
fn test_session_illegal_destination_changes_nothing() {
    let mut session = GameSession::new();
    session.select_square(sq("e2"));

    assert!(session.attempt_move(sq("e5")).is_none());
    assert_eq!(*session.position(), Position::initial());
    assert_eq!(session.status(), GameStatus::Playing);
}

#[test]
fn test_session_commit_replaces_position() {
    let mut session = GameSession::new();
    session.select_square(sq("e2"));
    let outcome = session.attempt_move(sq("e4")).expect("e4 is offered");

    assert_eq!(outcome.played, Move::new(sq("e2"), sq("e4")));
    assert_eq!(outcome.status, GameStatus::Playing);
    assert_eq!(*session.position(), outcome.position);
    assert_eq!(session.position().side_to_move, Color::Black);
    assert!(session.offered_moves().is_empty(), "selection cleared");
    assert!(!session.is_player_turn());
}

#[test]
fn test_session_checkmate_ends_game() {
    let mut session = GameSession::new();
    for token in FOOLS_MATE {
        let mv = parse_uci_move(token, session.position()).unwrap();
        session.select_square(mv.from);
        session.attempt_move(mv.to).expect("scripted move is legal");
    }

    assert_eq!(session.status(), GameStatus::Checkmate);
    assert!(session.is_over());
    assert!(session.select_square(sq("e1")).is_empty());
    assert!(session.apply_engine_move(Move::new(sq("e1"), sq("f2"))).is_none());
}

#[test]
fn test_session_promotion_choice() {
    let position = pos("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let mut session = GameSession::from_position(position);

    session.select_square(sq("a7"));
    assert!(session
        .attempt_move_with_promotion(sq("a8"), PieceKind::King)
        .is_none());
    assert_eq!(session.selected(), Some(sq("a7")), "rejected choice keeps selection");

    let outcome = session
        .attempt_move_with_promotion(sq("a8"), PieceKind::Rook)
        .expect("rook promotion");
    assert_eq!(outcome.played.promotion_piece, Some(PieceKind::Rook));
    assert_eq!(
        outcome.position.board.piece_at(sq("a8")),
        Some(Piece::new(PieceKind::Rook, Color::White))
    );
    assert_eq!(outcome.status, GameStatus::Check);
}

#[test]
fn test_session_plain_promotion_becomes_queen() {
    let mut session = GameSession::from_position(pos("4k3/P7/8/8/8/8/8/4K3 w - - 0 1"));
    session.select_square(sq("a7"));
    let outcome = session.attempt_move(sq("a8")).unwrap();
    assert_eq!(outcome.played.promotion_piece, Some(PieceKind::Queen));
}

#[test]
fn test_session_engine_move_validated() {
    let mut session = GameSession::new().with_player_color(Color::Black);
    assert!(!session.is_player_turn());

    assert!(session.apply_engine_move(Move::new(sq("e2"), sq("e5"))).is_none());
    assert!(session.apply_engine_move(Move::new(sq("e7"), sq("e5"))).is_none());

    let outcome = session
        .apply_engine_move(Move::new(sq("g1"), sq("f3")))
        .expect("Nf3 is legal");
    assert_eq!(outcome.position.side_to_move, Color::Black);
    assert!(session.is_player_turn());
}

#[test]
fn test_session_engine_castle_keeps_flags() {
    //! A bare from/to pair is matched against the generator, so castling
    //! still moves the rook.
    let mut session = GameSession::from_position(pos(CASTLE_READY));
    let outcome = session
        .apply_engine_move(Move::new(sq("e1"), sq("g1")))
        .unwrap();
    assert!(outcome.played.is_castle_king_side);
    assert_eq!(
        outcome.position.board.piece_at(sq("f1")),
        Some(Piece::new(PieceKind::Rook, Color::White))
    );
}

#[test]
fn test_session_new_game_keeps_player_color() {
    let mut session = GameSession::new().with_player_color(Color::Black);
    session
        .apply_engine_move(Move::new(sq("e2"), sq("e4")))
        .unwrap();

    session.new_game();
    assert_eq!(*session.position(), Position::initial());
    assert_eq!(session.player_color(), Color::Black);
    assert_eq!(session.status(), GameStatus::Playing);
}
