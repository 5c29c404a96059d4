//! # Chess Engine Core Types
//!
//! Plain value types shared by every part of the rules core. None of them carry
//! behaviour beyond small conversions; all game logic lives in `move_gen` and
//! `api`.
//!
//! ## Square Indexing
//!
//! Squares are `u8` indices `0..64` with `row = index / 8` and
//! `col = index % 8`. Row 0 is the eighth rank (Black's back rank, drawn at the
//! top), row 7 is the first rank. White pawns therefore advance toward
//! *decreasing* rows:
//!
//! ```text
//!        a  b  c  d  e  f  g  h
//!   8    0  1  2  3  4  5  6  7
//!   7    8  9 10 11 12 13 14 15
//!   ...
//!   1   56 57 58 59 60 61 62 63
//! ```
//!
//! The same orientation is used by the FEN encoder (rows are written top to
//! bottom) and by the UCI decoder (`row = 8 - rank`).
//!
//! ## Moves
//!
//! A [`Move`] is only meaningful relative to the position it was generated
//! from. The wire format used by external engines (`e1g1`) drops the special
//! move flags, so they are carried explicitly here and re-derived by the UCI
//! decoder.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board square index (`0..64`, row 0 = rank 8)
pub type Square = u8;

/// Side color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn advance (White moves up the board, toward row 0)
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which this color's pawns start and may double-advance
    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which this color's pawns promote
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Back rank row holding the king and rooks at game start
    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// FEN side-to-move letter
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

/// Piece kind (color is stored separately in [`Piece`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Lowercase FEN letter (`k q r b n p`)
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }

    /// Parse a FEN letter, ignoring case
    pub fn from_fen_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceKind::King),
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// Whether a pawn may promote to this kind
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

/// The four piece kinds a pawn may promote to, strongest first
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Colored piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// FEN letter: uppercase for White, lowercase for Black
    pub fn fen_char(self) -> char {
        let c = self.kind.fen_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parse a FEN piece letter
    pub fn from_fen_char(c: char) -> Option<Self> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { kind, color })
    }
}

/// Castling availability
///
/// Rights only ever go from `true` to `false` during a game. The only way to
/// obtain a right again is to start from a new position (initial setup or FEN).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_king_side: true,
        white_queen_side: true,
        black_king_side: true,
        black_queen_side: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_king_side: false,
        white_queen_side: false,
        black_king_side: false,
        black_queen_side: false,
    };

    #[inline]
    pub const fn king_side(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_side,
            Color::Black => self.black_king_side,
        }
    }

    #[inline]
    pub const fn queen_side(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queen_side,
            Color::Black => self.black_queen_side,
        }
    }

    /// Copy with both rights of `color` revoked
    #[must_use]
    pub const fn without_color(self, color: Color) -> Self {
        self.without_king_side(color).without_queen_side(color)
    }

    #[must_use]
    pub const fn without_king_side(mut self, color: Color) -> Self {
        match color {
            Color::White => self.white_king_side = false,
            Color::Black => self.black_king_side = false,
        }
        self
    }

    #[must_use]
    pub const fn without_queen_side(mut self, color: Color) -> Self {
        match color {
            Color::White => self.white_queen_side = false,
            Color::Black => self.black_queen_side = false,
        }
        self
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        !(self.white_king_side
            || self.white_queen_side
            || self.black_king_side
            || self.black_queen_side)
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::ALL
    }
}

/// A move between two squares with its special-rule flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub is_en_passant: bool,
    pub is_castle_king_side: bool,
    pub is_castle_queen_side: bool,
    pub is_promotion: bool,
    /// Chosen promotion piece; `None` on a promotion means Queen
    pub promotion_piece: Option<PieceKind>,
}

impl Move {
    /// Plain move or capture
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            is_en_passant: false,
            is_castle_king_side: false,
            is_castle_queen_side: false,
            is_promotion: false,
            promotion_piece: None,
        }
    }

    #[inline]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        let mut mv = Move::new(from, to);
        mv.is_en_passant = true;
        mv
    }

    #[inline]
    pub const fn castle_king_side(from: Square, to: Square) -> Self {
        let mut mv = Move::new(from, to);
        mv.is_castle_king_side = true;
        mv
    }

    #[inline]
    pub const fn castle_queen_side(from: Square, to: Square) -> Self {
        let mut mv = Move::new(from, to);
        mv.is_castle_queen_side = true;
        mv
    }

    /// Pawn move onto its last rank, piece to be chosen at commit time
    #[inline]
    pub const fn promotion(from: Square, to: Square) -> Self {
        let mut mv = Move::new(from, to);
        mv.is_promotion = true;
        mv
    }

    /// Copy of this promotion move with an explicit piece choice
    #[must_use]
    pub const fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.is_promotion = true;
        self.promotion_piece = Some(kind);
        self
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.is_castle_king_side || self.is_castle_queen_side
    }
}

/// Status of the game for the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    #[default]
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Checkmate and Stalemate end the game
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}
