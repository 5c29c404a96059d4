//! Board representation and square utilities
//!
//! Provides the 64-slot [`Board`] plus the coordinate helpers used throughout
//! the engine:
//! - Square <-> (row, col) conversion and bounds-checked stepping
//! - Algebraic square names (`e4`)
//! - King lookup

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;

/// Row of a square (0 = rank 8)
#[inline]
pub const fn row_of(square: Square) -> i8 {
    (square / 8) as i8
}

/// Column of a square (0 = file a)
#[inline]
pub const fn col_of(square: Square) -> i8 {
    (square % 8) as i8
}

/// Check if square coordinates are valid
#[inline]
pub const fn in_bounds(row: i8, col: i8) -> bool {
    row >= 0 && row < 8 && col >= 0 && col < 8
}

/// Convert row and column to a square, `None` when off the board
#[inline]
pub const fn square_at(row: i8, col: i8) -> Option<Square> {
    if in_bounds(row, col) {
        Some((row * 8 + col) as Square)
    } else {
        None
    }
}

/// Step `times` squares from `square` along `(row_delta, col_delta)`
#[inline]
pub const fn offset(square: Square, (dr, dc): (i8, i8), times: i8) -> Option<Square> {
    square_at(row_of(square) + dr * times, col_of(square) + dc * times)
}

/// Algebraic name of a square (`0` -> `a8`, `63` -> `h1`)
pub fn square_name(square: Square) -> String {
    let file = (b'a' + col_of(square) as u8) as char;
    let rank = 8 - row_of(square);
    format!("{file}{rank}")
}

/// Parse an algebraic square name (`e4`)
pub fn parse_square(name: &str) -> ChessEngineResult<Square> {
    let invalid = || ChessEngineError::InvalidSquare {
        name: name.to_string(),
    };
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(invalid());
    }
    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(invalid());
    }
    let col = (file - b'a') as i8;
    let row = 8 - (rank - b'0') as i8;
    square_at(row, col).ok_or_else(invalid)
}

/// Piece placement on the 64 squares
///
/// A `Board` is a value: every change produces a new board, so earlier
/// snapshots stay valid. Boards produced while simulating a candidate move are
/// only used to ask attack questions and never leave the legality filter.
///
/// # Panics
///
/// Square arguments must be in `0..64`. Accessors panic on a larger index;
/// text input goes through [`parse_square`], which never yields one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Standard initial arrangement (Black on rows 0-1, White on rows 6-7)
    pub fn starting() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.squares[col] = Some(Piece::new(kind, Color::Black));
            board.squares[8 + col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[48 + col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[56 + col] = Some(Piece::new(kind, Color::White));
        }
        board
    }

    /// Board holding exactly the given pieces
    pub fn from_pieces(pieces: &[(Square, Piece)]) -> Self {
        let mut board = Board::empty();
        for &(square, piece) in pieces {
            debug_assert!(square < 64, "square {square} off the board");
            board.squares[square as usize] = Some(piece);
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        debug_assert!(square < 64, "square {square} off the board");
        self.squares[square as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square as usize].is_none()
    }

    /// Whether `square` holds a piece of `color`
    #[inline]
    pub fn is_color(&self, square: Square, color: Color) -> bool {
        matches!(self.squares[square as usize], Some(p) if p.color == color)
    }

    /// Whether `square` holds exactly `piece`
    #[inline]
    pub fn holds(&self, square: Square, piece: Piece) -> bool {
        self.squares[square as usize] == Some(piece)
    }

    /// Square of `color`'s king, scanning all 64 squares
    ///
    /// `None` is a valid answer (hand-built boards), callers treat it as
    /// "not in check".
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        (0..64u8).find(|&sq| self.holds(sq, king))
    }

    /// Occupied squares with their pieces, in index order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(sq, p)| p.map(|p| (sq as Square, p)))
    }

    /// Copy of this board with `square` set to `piece`
    #[must_use]
    pub fn with(mut self, square: Square, piece: Option<Piece>) -> Self {
        debug_assert!(square < 64, "square {square} off the board");
        self.squares[square as usize] = piece;
        self
    }

    /// In-place edit, used only on freshly copied boards inside the crate
    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square as usize] = piece;
    }

    /// Lift the piece on `from` onto `to`, returning whatever `to` held
    #[inline]
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.squares[from as usize].take();
        std::mem::replace(&mut self.squares[to as usize], moving)
    }
}
