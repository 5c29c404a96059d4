//! UCI engine bridge
//!
//! Runs an external chess engine (Stockfish or anything else that speaks
//! UCI) as a child process and asks it for moves.
//!
//! ## Layers
//!
//! - [`protocol`] - The UCI exchange over any reader/writer pair
//! - [`process`] - A child process bound to that exchange, blocking
//! - [`engine`] - Async facade: background worker, serialization, timeouts
//! - [`config`] - Launch settings (serde)
//!
//! Moves come back as [`chess_engine::Move`] values with their castling,
//! en-passant and promotion flags re-derived from the position that was sent.

pub mod config;
pub mod engine;
pub mod error;
pub mod process;
pub mod protocol;

pub use config::EngineConfig;
pub use engine::{EngineBridge, PendingEngineMove};
pub use error::{BridgeError, BridgeResult};
pub use process::{EngineProcess, KillHandle};
pub use protocol::{parse_bestmove_line, BestMove, UciChannel};
