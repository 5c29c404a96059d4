//! Error types for chess engine
//!
//! The rules core itself never fails on reachable positions: illegal move
//! attempts are rejected by returning nothing, and a missing king degrades to
//! "not in check". Errors only arise at the text boundaries, when decoding
//! FEN strings, square names and UCI move tokens handed in from outside.

use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// A UCI move token that does not follow the `e2e4` / `e7e8q` grammar
    #[error("Malformed UCI move `{token}`: {reason}")]
    MalformedUciMove { token: String, reason: String },

    /// Invalid algebraic square name
    #[error("Invalid square `{name}` (expected a1..h8)")]
    InvalidSquare { name: String },

    /// FEN string that cannot be decoded into a position
    #[error("Invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },

    /// Promotion letter outside `q r b n`
    #[error("Invalid promotion piece `{letter}`")]
    InvalidPromotion { letter: char },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
