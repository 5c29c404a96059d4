//! Async facade over the engine process
//!
//! [`EngineBridge`] is what interactive code holds. Each blocking step
//! (start, one request, stop) runs on tokio's blocking pool, so the caller's
//! task never waits on a pipe.
//!
//! - Requests are serialized by an async mutex around the process slot; the
//!   protocol has no multiplexing.
//! - A request is bounded by `movetime + grace`. On timeout the process is
//!   killed and the session is dead until the next `start`.
//! - `stop` never waits for a search: an in-flight request is discarded by
//!   killing the process, and its caller gets [`BridgeError::Stopped`].
//! - `start` and `stop` are idempotent. The handshake is bounded by the
//!   response grace and can be cut short by `stop`.
//!
//! # Usage
//!
//! ```rust,ignore
//! let bridge = Arc::new(EngineBridge::new(EngineConfig::default()));
//! bridge.start().await?;
//! let mut pending = bridge.clone().request_best_move(*session.position());
//! // ... later, from a polling loop
//! if let Some(reply) = pending.try_take() {
//!     if let Some(mv) = reply? {
//!         session.apply_engine_move(mv);
//!     }
//! }
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::task::{ready, Context, Poll};

use chess_engine::{move_to_uci, Move, Position};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::sync::Mutex;
use tokio::task;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::error::{BridgeError, BridgeResult};
use crate::process::{EngineProcess, KillHandle};

/// Async, serialized access to one engine process
pub struct EngineBridge {
    config: EngineConfig,
    /// `None` when stopped, dead, or while a request has the process out on
    /// the worker
    process: Mutex<Option<EngineProcess>>,
    /// Set while a process is alive, including during a request
    kill_switch: parking_lot::Mutex<Option<KillHandle>>,
    /// Bumped by `stop`; work started under an older value is discarded
    epoch: AtomicU64,
}

impl EngineBridge {
    pub fn new(config: EngineConfig) -> Self {
        EngineBridge {
            config,
            process: Mutex::new(None),
            kill_switch: parking_lot::Mutex::new(None),
            epoch: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether an engine process is alive, including during the handshake
    pub fn is_running(&self) -> bool {
        self.kill_switch
            .lock()
            .as_ref()
            .is_some_and(KillHandle::is_alive)
    }

    /// Launch the engine and complete the handshake; no-op if already running
    ///
    /// The kill switch is armed as soon as the child exists, so `stop` or a
    /// drop can end a handshake the engine never answers. The handshake is
    /// bounded by the response grace.
    pub async fn start(&self) -> BridgeResult<()> {
        let mut slot = self.process.lock().await;
        if slot.is_some() {
            debug!("engine already started");
            return Ok(());
        }

        let epoch = self.epoch.load(Ordering::SeqCst);
        let config = self.config.clone();
        let mut process = task::spawn_blocking(move || EngineProcess::spawn(&config))
            .await
            .map_err(|err| BridgeError::Worker(err.to_string()))??;
        let kill = process.kill_handle();
        *self.kill_switch.lock() = Some(kill.clone());
        if self.epoch.load(Ordering::SeqCst) != epoch {
            self.kill_switch.lock().take();
            return Err(BridgeError::Stopped);
        }

        let limit = self.config.handshake_timeout();
        let worker = task::spawn_blocking(move || {
            let ready = process.handshake();
            (process, ready)
        });

        let (process, ready) = match tokio::time::timeout(limit, worker).await {
            Ok(Ok(done)) => done,
            Ok(Err(err)) => {
                self.kill_switch.lock().take();
                kill.kill();
                return Err(BridgeError::Worker(err.to_string()));
            }
            Err(_) => {
                warn!(after = ?limit, "engine handshake timed out, killing process");
                self.kill_switch.lock().take();
                kill.kill();
                return Err(BridgeError::Timeout { after: limit });
            }
        };

        if self.epoch.load(Ordering::SeqCst) != epoch {
            // stop() ran during the handshake; dropping kills the child
            self.kill_switch.lock().take();
            return Err(BridgeError::Stopped);
        }
        if let Err(err) = ready {
            self.kill_switch.lock().take();
            return Err(err);
        }

        info!(path = %self.config.path.display(), "engine ready");
        *slot = Some(process);
        Ok(())
    }

    /// Quit the engine; no-op if not running
    ///
    /// If a request is in flight the process is killed without waiting for
    /// its reply.
    pub async fn stop(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);

        let mut slot = match self.process.try_lock() {
            Ok(slot) => slot,
            Err(_) => {
                let in_flight = self.kill_switch.lock().take();
                if let Some(kill) = in_flight {
                    warn!("stopping engine while it is busy");
                    kill.kill();
                }
                self.process.lock().await
            }
        };

        self.kill_switch.lock().take();
        let Some(process) = slot.take() else {
            return;
        };
        if let Err(err) = task::spawn_blocking(move || process.quit()).await {
            warn!("engine shutdown worker failed: {err}");
        }
        info!("engine stopped");
    }

    /// Best move for `position`, or `None` if the engine has no legal move
    ///
    /// Concurrent callers queue. Any error ends the session: the process is
    /// gone and `start` has to be called again.
    pub async fn best_move(&self, position: &Position) -> BridgeResult<Option<Move>> {
        let mut slot = self.process.lock().await;
        let mut process = slot.take().ok_or(BridgeError::NotStarted)?;

        let epoch = self.epoch.load(Ordering::SeqCst);
        let kill = process.kill_handle();
        let movetime_ms = self.config.movetime_ms;
        let limit = self.config.request_timeout();
        let position = *position;

        let worker = task::spawn_blocking(move || {
            let reply = process.best_move(&position, movetime_ms);
            (process, reply)
        });

        let (process, reply) = match tokio::time::timeout(limit, worker).await {
            Ok(Ok(done)) => done,
            Ok(Err(err)) => {
                self.kill_switch.lock().take();
                kill.kill();
                return Err(BridgeError::Worker(err.to_string()));
            }
            Err(_) => {
                warn!(after = ?limit, "engine request timed out, killing process");
                self.kill_switch.lock().take();
                kill.kill();
                return Err(BridgeError::Timeout { after: limit });
            }
        };

        if self.epoch.load(Ordering::SeqCst) != epoch {
            debug!("discarding reply from stopped engine");
            return Err(BridgeError::Stopped);
        }

        match reply {
            Ok(best) => {
                match &best {
                    Some(mv) => debug!(mv = %move_to_uci(mv), "engine replied"),
                    None => debug!("engine has no legal move"),
                }
                *slot = Some(process);
                Ok(best)
            }
            Err(err) => {
                warn!("engine session failed: {err}");
                self.kill_switch.lock().take();
                drop(process);
                Err(err)
            }
        }
    }

    /// Run [`best_move`](Self::best_move) on a background task
    ///
    /// Must be called from within a tokio runtime.
    pub fn request_best_move(self: Arc<Self>, position: Position) -> PendingEngineMove {
        let (sender, receiver) = oneshot::channel();
        tokio::spawn(async move {
            let reply = self.best_move(&position).await;
            if sender.send(reply).is_err() {
                debug!("engine reply dropped, nobody is waiting");
            }
        });
        PendingEngineMove {
            receiver: Some(receiver),
        }
    }
}

impl Drop for EngineBridge {
    fn drop(&mut self) {
        if let Some(kill) = self.kill_switch.get_mut().take() {
            kill.kill();
        }
    }
}

/// Reply of a background best-move request
///
/// Either `.await` it or poll it from a synchronous loop with
/// [`try_take`](Self::try_take).
pub struct PendingEngineMove {
    /// `None` once the reply has been handed out
    receiver: Option<oneshot::Receiver<BridgeResult<Option<Move>>>>,
}

impl PendingEngineMove {
    /// The reply if it has arrived; yields it at most once
    pub fn try_take(&mut self) -> Option<BridgeResult<Option<Move>>> {
        let receiver = self.receiver.as_mut()?;
        let reply = match receiver.try_recv() {
            Ok(reply) => reply,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(lost_reply()),
        };
        self.receiver = None;
        Some(reply)
    }

    /// Whether the reply was already taken
    pub fn is_taken(&self) -> bool {
        self.receiver.is_none()
    }
}

impl Future for PendingEngineMove {
    type Output = BridgeResult<Option<Move>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let Some(receiver) = self.receiver.as_mut() else {
            return Poll::Ready(Err(lost_reply()));
        };
        let reply = ready!(Pin::new(receiver).poll(cx)).unwrap_or_else(|_| Err(lost_reply()));
        self.receiver = None;
        Poll::Ready(reply)
    }
}

fn lost_reply() -> BridgeError {
    BridgeError::Worker("engine task ended without a reply".to_string())
}
