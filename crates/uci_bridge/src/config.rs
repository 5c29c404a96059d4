//! Engine launch settings

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How to launch the engine and how long to let it think
///
/// Every field has a default, so a config file only needs the fields it
/// changes:
///
/// ```json
/// { "path": "/usr/local/bin/stockfish", "movetime_ms": 1000 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Executable to spawn, looked up on `PATH` when relative
    pub path: PathBuf,
    /// Extra command-line arguments
    pub args: Vec<String>,
    /// Value sent with `go movetime`
    pub movetime_ms: u64,
    /// Slack on top of `movetime_ms` before a request is abandoned
    pub response_grace_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            path: PathBuf::from("stockfish"),
            args: Vec::new(),
            movetime_ms: 400,
            response_grace_ms: 5_000,
        }
    }
}

impl EngineConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EngineConfig {
            path: path.into(),
            ..EngineConfig::default()
        }
    }

    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_movetime_ms(mut self, movetime_ms: u64) -> Self {
        self.movetime_ms = movetime_ms;
        self
    }

    #[must_use]
    pub fn with_response_grace_ms(mut self, grace_ms: u64) -> Self {
        self.response_grace_ms = grace_ms;
        self
    }

    /// Bound on the `uci` / `isready` handshake
    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_millis(self.response_grace_ms)
    }

    /// Upper bound on a single best-move request
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.movetime_ms.saturating_add(self.response_grace_ms))
    }
}
