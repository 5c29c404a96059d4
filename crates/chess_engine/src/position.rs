//! Position aggregate
//!
//! A [`Position`] bundles everything the rules need to know about a moment in
//! the game: piece placement, side to move, castling rights and the en-passant
//! target. It is the unit handed to the move generator, replaced wholesale by
//! [`apply_move`](crate::api::apply_move), and round-tripped to external
//! engines as FEN.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::fen;
use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// Square a pawn skipped over on the previous ply, if any
    pub en_passant: Option<Square>,
}

impl Position {
    /// Standard initial position, White to move
    pub fn initial() -> Self {
        Position {
            board: Board::starting(),
            side_to_move: Color::White,
            castling: CastlingRights::ALL,
            en_passant: None,
        }
    }

    pub fn new(
        board: Board,
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<Square>,
    ) -> Self {
        Position {
            board,
            side_to_move,
            castling,
            en_passant,
        }
    }

    pub fn from_fen(fen: &str) -> ChessEngineResult<Self> {
        fen::parse_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        fen::to_fen(self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::initial()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

impl FromStr for Position {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}
