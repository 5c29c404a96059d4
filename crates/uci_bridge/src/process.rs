//! Synchronous engine process
//!
//! [`EngineProcess`] owns one child process and the [`UciChannel`] over its
//! pipes. Every call blocks, so it belongs on a worker thread; the async
//! [`crate::EngineBridge`] runs it under `spawn_blocking`.
//!
//! The child is killed when the `EngineProcess` is dropped, on every exit
//! path. A [`KillHandle`] can do the same from another thread while a
//! request is blocked reading, which makes that read return end-of-stream.

use std::io::BufReader;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::sync::Arc;

use chess_engine::{parse_uci_move, Move, Position};
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::{BridgeError, BridgeResult};
use crate::protocol::{BestMove, UciChannel};

/// Shared handle that terminates the child process
#[derive(Clone)]
pub struct KillHandle {
    child: Arc<Mutex<Child>>,
}

impl KillHandle {
    /// Kill and reap the child; a no-op once it has exited
    pub fn kill(&self) {
        let mut child = self.child.lock();
        if let Ok(Some(_)) = child.try_wait() {
            return;
        }
        let pid = child.id();
        if let Err(err) = child.kill() {
            debug!(pid, "kill failed: {err}");
        }
        if let Err(err) = child.wait() {
            debug!(pid, "wait failed: {err}");
        }
        debug!(pid, "engine process terminated");
    }

    /// Whether the child is still running
    pub fn is_alive(&self) -> bool {
        matches!(self.child.lock().try_wait(), Ok(None))
    }
}

/// A started engine: child process plus the UCI conversation with it
pub struct EngineProcess {
    channel: UciChannel<BufReader<ChildStdout>, ChildStdin>,
    handle: KillHandle,
}

impl EngineProcess {
    /// Launch the executable without talking to it yet
    ///
    /// stderr is discarded so diagnostics can never interleave with the
    /// protocol lines on stdout.
    pub fn spawn(config: &EngineConfig) -> BridgeResult<Self> {
        let mut child = Command::new(&config.path)
            .args(&config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| BridgeError::Spawn {
                path: config.path.clone(),
                source,
            })?;

        let pipes = (child.stdin.take(), child.stdout.take());
        let handle = KillHandle {
            child: Arc::new(Mutex::new(child)),
        };

        let (stdin, stdout) = match pipes {
            (Some(stdin), Some(stdout)) => (stdin, stdout),
            (None, _) => {
                handle.kill();
                return Err(BridgeError::MissingPipe { name: "stdin" });
            }
            (_, None) => {
                handle.kill();
                return Err(BridgeError::MissingPipe { name: "stdout" });
            }
        };

        Ok(EngineProcess {
            channel: UciChannel::new(BufReader::new(stdout), stdin),
            handle,
        })
    }

    /// Launch and complete the `uci` / `isready` handshake
    pub fn start(config: &EngineConfig) -> BridgeResult<Self> {
        let mut process = EngineProcess::spawn(config)?;
        process.handshake()?;
        info!(path = %config.path.display(), "engine ready");
        Ok(process)
    }

    /// `uci` / `uciok` then `isready` / `readyok` on a spawned process
    ///
    /// Blocks until the engine answers; killing the process through a
    /// [`KillHandle`] ends the wait with end-of-stream.
    pub fn handshake(&mut self) -> BridgeResult<()> {
        self.channel.handshake()
    }

    /// Ask for the best move in `position`
    ///
    /// `Ok(None)` when the engine reports that the side to move has no legal
    /// move. The returned move carries the flags re-derived from `position`.
    pub fn best_move(&mut self, position: &Position, movetime_ms: u64) -> BridgeResult<Option<Move>> {
        let fen = position.to_fen();
        match self.channel.request_best_move(&fen, movetime_ms)? {
            BestMove::NoMove => Ok(None),
            BestMove::Move(token) => Ok(Some(parse_uci_move(&token, position)?)),
        }
    }

    pub fn kill_handle(&self) -> KillHandle {
        self.handle.clone()
    }

    /// Send `quit`, then terminate the process regardless of the answer
    pub fn quit(mut self) {
        if let Err(err) = self.channel.quit() {
            debug!("quit not delivered: {err}");
        }
        self.handle.kill();
    }
}

impl Drop for EngineProcess {
    fn drop(&mut self) {
        self.handle.kill();
    }
}
