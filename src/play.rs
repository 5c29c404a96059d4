//! `magnus play`: a game between the terminal and the engine
//!
//! The human types moves as UCI text (`e2e4`, `e7e8n`). On the engine's
//! turns the position goes to the bridge and the reply is checked against
//! the legal moves before it is committed.

use std::io::Write;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chess_engine::{legal_moves_for_side, move_to_uci, parse_uci_move, GameSession};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{info, warn};
use uci_bridge::EngineBridge;

use crate::config::PlaySettings;
use crate::render::{describe_status, render_board};

const HELP: &str = "\
Commands:
  <move>   play a move in UCI notation, e.g. e2e4 or e7e8n
  moves    list your legal moves
  fen      print the current position
  new      start a new game
  quit     leave";

/// One line of player input
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Move(&'a str),
    Moves,
    Fen,
    New,
    Help,
    Quit,
}

fn parse_input(line: &str) -> Option<Input<'_>> {
    let word = line.trim();
    Some(match word {
        "" => return None,
        "quit" | "exit" => Input::Quit,
        "moves" => Input::Moves,
        "fen" => Input::Fen,
        "new" => Input::New,
        "help" | "?" => Input::Help,
        token => Input::Move(token),
    })
}

pub async fn run(settings: PlaySettings) -> Result<()> {
    let bridge = Arc::new(EngineBridge::new(settings.engine.clone()));
    bridge.start().await.with_context(|| {
        format!("starting engine {}", settings.engine.path.display())
    })?;

    let mut session =
        GameSession::from_position(settings.start).with_player_color(settings.player_color);
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    info!(color = ?settings.player_color, "game started");
    let result = game_loop(&bridge, &mut session, &mut input).await;
    bridge.stop().await;
    result
}

async fn game_loop(
    bridge: &Arc<EngineBridge>,
    session: &mut GameSession,
    input: &mut Lines<BufReader<Stdin>>,
) -> Result<()> {
    show(session);
    println!("Type `help` for commands.");

    loop {
        if session.is_over() {
            return Ok(());
        }

        if !session.is_player_turn() {
            engine_turn(bridge, session).await?;
            show(session);
            continue;
        }

        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = input.next_line().await? else {
            return Ok(());
        };

        match parse_input(&line) {
            None => {}
            Some(Input::Quit) => return Ok(()),
            Some(Input::Help) => println!("{HELP}"),
            Some(Input::Fen) => println!("{}", session.position()),
            Some(Input::Moves) => {
                let moves: Vec<String> = legal_moves_for_side(session.position())
                    .iter()
                    .map(move_to_uci)
                    .collect();
                println!("{}", moves.join(" "));
            }
            Some(Input::New) => {
                session.new_game();
                show(session);
            }
            Some(Input::Move(token)) => {
                if player_move(session, token) {
                    show(session);
                }
            }
        }
    }
}

/// Commit the player's move; false (with a message) if it is not legal
fn player_move(session: &mut GameSession, token: &str) -> bool {
    let mv = match parse_uci_move(token, session.position()) {
        Ok(mv) => mv,
        Err(err) => {
            println!("{err}");
            return false;
        }
    };

    session.clear_selection();
    session.select_square(mv.from);
    let outcome = match mv.promotion_piece {
        Some(kind) => session.attempt_move_with_promotion(mv.to, kind),
        None => session.attempt_move(mv.to),
    };
    if outcome.is_none() {
        println!("Illegal move: {token}");
    }
    outcome.is_some()
}

async fn engine_turn(bridge: &Arc<EngineBridge>, session: &mut GameSession) -> Result<()> {
    println!("Engine is thinking...");
    let pending = bridge.clone().request_best_move(*session.position());
    let reply = pending.await.context("engine request failed")?;

    let Some(mv) = reply else {
        // The engine only says this when the game is already over
        warn!("engine reported no legal move");
        bail!("engine has no move in a position the rules consider playable");
    };

    match session.apply_engine_move(mv) {
        Some(outcome) => {
            println!("Engine plays {}", move_to_uci(&outcome.played));
            Ok(())
        }
        None => bail!("engine proposed an illegal move: {}", move_to_uci(&mv)),
    }
}

fn show(session: &GameSession) {
    println!("\n{}", render_board(&session.position().board));
    println!(
        "{}",
        describe_status(session.status(), session.position().side_to_move)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::{parse_square, GameStatus, PieceKind};

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("  e2e4 \n"), Some(Input::Move("e2e4")));
        assert_eq!(parse_input("quit"), Some(Input::Quit));
        assert_eq!(parse_input("exit"), Some(Input::Quit));
        assert_eq!(parse_input("moves"), Some(Input::Moves));
        assert_eq!(parse_input("   "), None);
    }

    #[test]
    fn test_player_move_rejects_bad_input() {
        let mut session = GameSession::new();
        assert!(!player_move(&mut session, "e2e5"));
        assert!(!player_move(&mut session, "hello"));
        assert!(!player_move(&mut session, "e7e5"), "not White's pawn");
        assert_eq!(session.status(), GameStatus::Playing);
        assert!(session.is_player_turn());
    }

    #[test]
    fn test_player_move_accepted_after_rejected_attempt() {
        let mut session = GameSession::new();
        assert!(!player_move(&mut session, "e2e5"));
        assert_eq!(session.selected(), Some(52), "rejected attempt keeps e2");

        assert!(player_move(&mut session, "e2e4"), "same piece, legal move");
        assert!(session.position().board.piece_at(36).is_some());
        assert!(!session.is_player_turn());
    }

    #[test]
    fn test_player_move_after_other_rejection() {
        let mut session = GameSession::new();
        assert!(!player_move(&mut session, "g1g3"));
        assert!(player_move(&mut session, "g1f3"));
        assert!(session.position().board.is_empty(62));
    }

    #[test]
    fn test_player_move_with_promotion_letter() {
        let position = chess_engine::Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mut session = GameSession::from_position(position);

        assert!(player_move(&mut session, "a7a8n"));
        let a8 = parse_square("a8").unwrap();
        let piece = session.position().board.piece_at(a8).unwrap();
        assert_eq!(piece.kind, PieceKind::Knight);
    }
}
