//! # Chess Engine Constants
//!
//! Direction vectors and the canonical squares the special rules refer to.
//!
//! ## Direction Vectors
//!
//! Movement is expressed as `(row_delta, col_delta)` pairs rather than linear
//! index offsets. Walking in `(row, col)` space makes the board-edge test a
//! plain bounds check and avoids the wrap-around corrections that linear
//! offsets need on the a- and h-files.
//!
//! Because row 0 is the eighth rank, "north" (toward Black) is `row - 1`.
//!
//! ## Canonical Squares
//!
//! Castling is only ever defined relative to the starting squares:
//!
//! | Square | Index | Meaning |
//! |--------|-------|---------|
//! | e1 | 60 | White king start |
//! | e8 | 4  | Black king start |
//! | h1 / a1 | 63 / 56 | White rook origins (king / queen side) |
//! | h8 / a8 | 7 / 0   | Black rook origins (king / queen side) |
//! | g1 / c1 | 62 / 58 | White castling destinations |
//! | g8 / c8 | 6 / 2   | Black castling destinations |

use crate::types::{Color, Square};

pub const N: (i8, i8) = (-1, 0);
pub const S: (i8, i8) = (1, 0);
pub const E: (i8, i8) = (0, 1);
pub const W: (i8, i8) = (0, -1);
pub const NE: (i8, i8) = (-1, 1);
pub const NW: (i8, i8) = (-1, -1);
pub const SE: (i8, i8) = (1, 1);
pub const SW: (i8, i8) = (1, -1);

pub const ROOK_DIRS: [(i8, i8); 4] = [N, S, E, W];
pub const BISHOP_DIRS: [(i8, i8); 4] = [NE, NW, SE, SW];
pub const QUEEN_DIRS: [(i8, i8); 8] = [N, S, E, W, NE, NW, SE, SW];
pub const KING_DIRS: [(i8, i8); 8] = QUEEN_DIRS;

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const WHITE_KING_START: Square = 60;
pub const BLACK_KING_START: Square = 4;

pub const WHITE_KING_SIDE_ROOK: Square = 63;
pub const WHITE_QUEEN_SIDE_ROOK: Square = 56;
pub const BLACK_KING_SIDE_ROOK: Square = 7;
pub const BLACK_QUEEN_SIDE_ROOK: Square = 0;

pub const WHITE_KING_SIDE_CASTLE: Square = 62;
pub const WHITE_QUEEN_SIDE_CASTLE: Square = 58;
pub const BLACK_KING_SIDE_CASTLE: Square = 6;
pub const BLACK_QUEEN_SIDE_CASTLE: Square = 2;

/// Standard starting position
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmove clock and fullmove number written by the FEN encoder.
/// Neither counter is tracked; external engines only need them to be present.
pub const FEN_COUNTERS: &str = "0 1";

#[inline]
pub const fn king_start(color: Color) -> Square {
    match color {
        Color::White => WHITE_KING_START,
        Color::Black => BLACK_KING_START,
    }
}

#[inline]
pub const fn king_side_rook(color: Color) -> Square {
    match color {
        Color::White => WHITE_KING_SIDE_ROOK,
        Color::Black => BLACK_KING_SIDE_ROOK,
    }
}

#[inline]
pub const fn queen_side_rook(color: Color) -> Square {
    match color {
        Color::White => WHITE_QUEEN_SIDE_ROOK,
        Color::Black => BLACK_QUEEN_SIDE_ROOK,
    }
}

#[inline]
pub const fn king_side_castle(color: Color) -> Square {
    match color {
        Color::White => WHITE_KING_SIDE_CASTLE,
        Color::Black => BLACK_KING_SIDE_CASTLE,
    }
}

#[inline]
pub const fn queen_side_castle(color: Color) -> Square {
    match color {
        Color::White => WHITE_QUEEN_SIDE_CASTLE,
        Color::Black => BLACK_QUEEN_SIDE_CASTLE,
    }
}
