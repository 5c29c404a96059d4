//! # Chess Engine - Deterministic Chess Rules
//!
//! Board representation, move generation, legality filtering, special-rule
//! bookkeeping (castling, en passant, promotion) and game-termination
//! detection, plus the text codecs used to talk to external UCI engines.
//!
//! ## Design
//!
//! Everything here is a pure function over values. A [`Position`] is never
//! mutated after creation; [`apply_move`] returns a new one. This keeps earlier
//! positions valid as independent snapshots (the legality filter relies on it)
//! and makes every operation safe to call from any number of threads.
//!
//! ```text
//! Position ─► generate_pseudo_moves ─► generate_legal_moves ─► apply_move ─► game_status
//!    │
//!    └─► to_fen ─► (external engine) ─► parse_uci_move ─► apply_move
//! ```
//!
//! The only mutable state is [`GameSession`], the move-selection boundary a
//! presentation layer owns.
//!
//! ## Module Organization
//!
//! - `types` - Colors, pieces, moves, castling rights, game status
//! - `board` - 64-square board and coordinate helpers
//! - `position` - Board + side to move + castling + en-passant target
//! - `move_gen` - Attack detection, pseudo-legal generation, legality filter
//! - `api` - State transition, status evaluation, interactive session
//! - `fen` / `uci` - Text codecs for external engines
//! - `perft` - Move-tree node counting for generator validation

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod fen;
pub mod move_gen;
pub mod perft;
pub mod position;
pub mod types;
pub mod uci;

pub use api::{apply_move, game_status, GameSession, MoveOutcome};
pub use board::{parse_square, square_name, Board};
pub use error::{ChessEngineError, ChessEngineResult};
pub use fen::{parse_fen, to_fen};
pub use move_gen::{
    generate_legal_moves, generate_pseudo_moves, has_any_legal_move, is_in_check,
    is_square_attacked, legal_moves_for_side,
};
pub use perft::{perft, perft_divide};
pub use position::Position;
pub use types::{CastlingRights, Color, GameStatus, Move, Piece, PieceKind, Square};
pub use uci::{move_to_uci, parse_uci_move};
