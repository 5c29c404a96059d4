//! Terminal board rendering
//!
//! Row 0 (rank 8) is printed first, so White plays up the screen.

use chess_engine::{Board, Color, GameStatus, Piece, PieceKind};

const FILES: &str = "  a b c d e f g h";

/// Board as text with rank and file labels
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(FILES);
    out.push('\n');

    for square in 0..64u8 {
        let rank = 8 - square / 8;
        let file = square % 8;
        if file == 0 {
            out.push_str(&format!("{rank} "));
        }
        out.push(board.piece_at(square).map_or('·', piece_glyph));
        if file < 7 {
            out.push(' ');
        } else {
            out.push_str(&format!(" {rank}\n"));
        }
    }

    out.push_str(FILES);
    out
}

fn piece_glyph(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

/// One-line status for the side to move
pub fn describe_status(status: GameStatus, side_to_move: Color) -> String {
    match status {
        GameStatus::Playing => format!("{side_to_move:?} to move"),
        GameStatus::Check => format!("{side_to_move:?} is in check"),
        GameStatus::Checkmate => format!("Checkmate, {:?} wins", side_to_move.opposite()),
        GameStatus::Stalemate => "Stalemate, draw".to_string(),
    }
}
