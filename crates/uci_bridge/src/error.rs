//! Error types for the engine bridge
//!
//! Every failure here is fatal to the engine session it happened in: the
//! UCI exchange is a strict call/response sequence and cannot be resumed
//! halfway, so callers restart the bridge instead of retrying a request.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use chess_engine::ChessEngineError;
use thiserror::Error;

/// Errors that can occur while talking to an engine process
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The executable could not be launched
    #[error("Failed to spawn engine `{}`", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from or writing to the engine's pipes failed
    #[error("Engine I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The engine closed its output before sending the expected line
    #[error("Engine output ended while waiting for `{waiting_for}`")]
    EndOfStream { waiting_for: &'static str },

    /// Request made before `start` or after the session died
    #[error("Engine is not running")]
    NotStarted,

    /// The bridge was stopped while this request was in flight
    #[error("Engine was stopped before replying")]
    Stopped,

    /// No `bestmove` within `movetime` plus the grace period
    #[error("Engine did not reply within {after:?}")]
    Timeout { after: Duration },

    /// The background worker panicked or was cancelled
    #[error("Engine worker failed: {0}")]
    Worker(String),

    /// The `bestmove` token does not decode against the position sent
    #[error("Engine sent an undecodable move: {0}")]
    Decode(#[from] ChessEngineError),

    /// The child process was spawned without one of its standard pipes
    #[error("Engine process has no {name} pipe")]
    MissingPipe { name: &'static str },
}

/// Result type alias for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;
