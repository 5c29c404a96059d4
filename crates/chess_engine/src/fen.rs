//! Forsyth–Edwards Notation codec
//!
//! The encoder output is what external engines receive in
//! `position fen <FEN>`, so it has to match the grammar exactly:
//!
//! ```text
//! rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1
//! └──────────── rows 0..7 ───────────────┘ │  │    │ └┴─ counters (fixed)
//!                                    side ─┘  │    └─ en-passant target
//!                                   castling ─┘
//! ```
//!
//! Halfmove clock and fullmove number are not tracked and are always written as
//! `0 1`. The parser accepts and ignores whatever counters it is given.

use crate::board::{parse_square, square_at, square_name, Board};
use crate::constants::FEN_COUNTERS;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::position::Position;
use crate::types::*;

/// Serialize a position
pub fn to_fen(position: &Position) -> String {
    let mut fen = String::with_capacity(90);

    for row in 0..8i8 {
        let mut empty = 0;
        for col in 0..8i8 {
            let piece = square_at(row, col).and_then(|sq| position.board.piece_at(sq));
            match piece {
                None => empty += 1,
                Some(piece) => {
                    if empty > 0 {
                        fen.push_str(&empty.to_string());
                        empty = 0;
                    }
                    fen.push(piece.fen_char());
                }
            }
        }
        if empty > 0 {
            fen.push_str(&empty.to_string());
        }
        if row != 7 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(position.side_to_move.fen_char());
    fen.push(' ');
    fen.push_str(&castling_field(position.castling));
    fen.push(' ');
    match position.en_passant {
        Some(square) => fen.push_str(&square_name(square)),
        None => fen.push('-'),
    }
    fen.push(' ');
    fen.push_str(FEN_COUNTERS);

    fen
}

/// `KQkq` subset in fixed order, or `-`
fn castling_field(rights: CastlingRights) -> String {
    let mut field = String::with_capacity(4);
    if rights.white_king_side {
        field.push('K');
    }
    if rights.white_queen_side {
        field.push('Q');
    }
    if rights.black_king_side {
        field.push('k');
    }
    if rights.black_queen_side {
        field.push('q');
    }
    if field.is_empty() {
        field.push('-');
    }
    field
}

/// Parse a FEN string into a position
///
/// The first four fields are required; the move counters are optional.
pub fn parse_fen(fen: &str) -> ChessEngineResult<Position> {
    let invalid = |reason: &str| ChessEngineError::InvalidFen {
        fen: fen.to_string(),
        reason: reason.to_string(),
    };

    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 4 || fields.len() > 6 {
        return Err(invalid("expected 4 to 6 space-separated fields"));
    }

    let board = parse_placement(fields[0]).map_err(|reason| invalid(&reason))?;

    let side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        _ => return Err(invalid("side to move must be `w` or `b`")),
    };

    let castling = parse_castling(fields[2]).ok_or_else(|| invalid("bad castling field"))?;

    let en_passant = match fields[3] {
        "-" => None,
        name => Some(parse_square(name).map_err(|_| invalid("bad en-passant square"))?),
    };

    for counter in &fields[4..] {
        if counter.parse::<u32>().is_err() {
            return Err(invalid("move counters must be numbers"));
        }
    }

    Ok(Position::new(board, side_to_move, castling, en_passant))
}

fn parse_placement(placement: &str) -> Result<Board, String> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(format!("expected 8 ranks, found {}", rows.len()));
    }

    let mut board = Board::empty();
    for (row, text) in rows.iter().enumerate() {
        let mut col: i8 = 0;
        for c in text.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(format!("bad empty-square count `{c}`"));
                }
                col += skip as i8;
            } else {
                let piece = Piece::from_fen_char(c).ok_or_else(|| format!("unknown piece `{c}`"))?;
                let square = square_at(row as i8, col)
                    .ok_or_else(|| format!("rank {} overflows", 8 - row))?;
                board.set(square, Some(piece));
                col += 1;
            }
            if col > 8 {
                return Err(format!("rank {} overflows", 8 - row));
            }
        }
        if col != 8 {
            return Err(format!("rank {} has {col} files", 8 - row));
        }
    }
    Ok(board)
}

fn parse_castling(field: &str) -> Option<CastlingRights> {
    if field == "-" {
        return Some(CastlingRights::NONE);
    }
    let mut rights = CastlingRights::NONE;
    for c in field.chars() {
        match c {
            'K' => rights.white_king_side = true,
            'Q' => rights.white_queen_side = true,
            'k' => rights.black_king_side = true,
            'q' => rights.black_queen_side = true,
            _ => return None,
        }
    }
    Some(rights)
}
