//! The UCI text exchange, independent of where the streams come from
//!
//! [`UciChannel`] speaks the small subset of UCI the bridge needs over any
//! `BufRead`/`Write` pair. [`crate::EngineProcess`] plugs a child process's
//! pipes into it; tests plug in byte buffers.
//!
//! ```text
//! -> uci                 <- ... uciok
//! -> isready             <- readyok
//! -> ucinewgame
//! -> isready             <- readyok
//! -> position fen <FEN>
//! -> go movetime <ms>    <- ... bestmove e2e4 [ponder ...]
//! -> quit
//! ```
//!
//! All calls block until the expected line arrives. Lines that are not the
//! awaited one (`id`, `option`, `info` ...) are skipped.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{BridgeError, BridgeResult};

/// Reply to a `go` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BestMove {
    /// First token after `bestmove`, still undecoded
    Move(String),
    /// `(none)` or `0000`: the engine's side has no legal move
    NoMove,
}

/// Parse a `bestmove ...` line; `None` for any other line
pub fn parse_bestmove_line(line: &str) -> Option<BestMove> {
    let rest = line.strip_prefix("bestmove ")?;
    let token = rest.split_whitespace().next().unwrap_or_default();
    Some(match token {
        "(none)" | "0000" => BestMove::NoMove,
        _ => BestMove::Move(token.to_string()),
    })
}

/// Blocking UCI conversation over a reader/writer pair
pub struct UciChannel<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl<R: BufRead, W: Write> UciChannel<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        UciChannel {
            reader,
            writer,
            line: String::new(),
        }
    }

    /// Write one command line and flush it
    pub fn send(&mut self, command: &str) -> BridgeResult<()> {
        debug!(target: "uci", "-> {command}");
        writeln!(self.writer, "{command}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Next line with the line terminator trimmed
    fn next_line(&mut self, waiting_for: &'static str) -> BridgeResult<&str> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Err(BridgeError::EndOfStream { waiting_for });
        }
        let line = self.line.trim_end_matches(['\r', '\n']);
        debug!(target: "uci", "<- {line}");
        Ok(line)
    }

    /// Skip lines until one equals `token` (surrounding whitespace ignored)
    pub fn wait_for(&mut self, token: &'static str) -> BridgeResult<()> {
        loop {
            if self.next_line(token)?.trim() == token {
                return Ok(());
            }
        }
    }

    /// `uci` / `uciok` followed by `isready` / `readyok`
    pub fn handshake(&mut self) -> BridgeResult<()> {
        self.send("uci")?;
        self.wait_for("uciok")?;
        self.sync()
    }

    /// `isready` / `readyok`
    pub fn sync(&mut self) -> BridgeResult<()> {
        self.send("isready")?;
        self.wait_for("readyok")
    }

    /// One full request: fresh game, position, timed search
    pub fn request_best_move(&mut self, fen: &str, movetime_ms: u64) -> BridgeResult<BestMove> {
        self.send("ucinewgame")?;
        self.sync()?;
        self.send(&format!("position fen {fen}"))?;
        self.send(&format!("go movetime {movetime_ms}"))?;

        loop {
            if let Some(best) = parse_bestmove_line(self.next_line("bestmove")?) {
                return Ok(best);
            }
        }
    }

    pub fn quit(&mut self) -> BridgeResult<()> {
        self.send("quit")
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
