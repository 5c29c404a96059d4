//! Minimal UCI responder used by the bridge tests
//!
//! Answers the handshake and replies to every `go` with a fixed move.
//!
//! ```text
//! scripted_uci_engine [MOVE]   reply `bestmove MOVE` (default e2e4)
//!     --none                   reply `bestmove (none)`
//!     --hang-up                exit after `go` without replying
//!     --silent                 never answer `go` (keeps reading stdin)
//!     --no-uciok               exit before finishing the handshake
//!     --stall-handshake        never answer `uci` (keeps reading stdin)
//! ```

use std::io::{self, BufRead, Write};

enum Reply {
    Move(String),
    NoMove,
    HangUp,
    Silent,
}

fn main() -> io::Result<()> {
    let mut reply = Reply::Move("e2e4".to_string());
    let mut handshake = true;
    let mut stall = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--none" => reply = Reply::NoMove,
            "--hang-up" => reply = Reply::HangUp,
            "--silent" => reply = Reply::Silent,
            "--no-uciok" => handshake = false,
            "--stall-handshake" => stall = true,
            token => reply = Reply::Move(token.to_string()),
        }
    }

    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        match line.split_whitespace().next().unwrap_or_default() {
            "uci" if stall => {}
            "uci" => {
                if !handshake {
                    return Ok(());
                }
                writeln!(out, "id name scripted")?;
                writeln!(out, "option name Hash type spin default 16 min 1 max 1024")?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "go" => match &reply {
                Reply::Move(token) => {
                    writeln!(out, "info depth 1 score cp 0 pv {token}")?;
                    writeln!(out, "bestmove {token}")?;
                }
                Reply::NoMove => writeln!(out, "bestmove (none)")?,
                Reply::HangUp => return Ok(()),
                Reply::Silent => {}
            },
            "quit" => return Ok(()),
            _ => {}
        }
        out.flush()?;
    }
    Ok(())
}
