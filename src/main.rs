use std::time::Instant;

use anyhow::{Context, Result};
use chess_engine::{perft, perft_divide, Position};
use clap::Parser;
use tracing_subscriber::EnvFilter;

// Module declarations
mod cli;
mod config;
mod play;
mod render;

use cli::{Cli, Command};
use config::PlaySettings;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Play(args) => {
            let settings = PlaySettings::resolve(&args)?;
            play::run(settings).await
        }
        Command::Perft { depth, fen, divide } => run_perft(&fen, depth, divide),
    }
}

/// Logs go to stderr so they never mix with the board on stdout
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("magnus=info,warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_perft(fen: &str, depth: u32, divide: bool) -> Result<()> {
    let position = Position::from_fen(fen).context("invalid FEN")?;
    let start = Instant::now();

    let nodes = if divide {
        let rows = perft_divide(&position, depth);
        for (mv, count) in &rows {
            println!("{mv}: {count}");
        }
        rows.iter().map(|(_, count)| count).sum()
    } else {
        perft(&position, depth)
    };

    let elapsed = start.elapsed();
    println!("\nNodes: {nodes}");
    println!(
        "Time: {:.3}s ({:.0} nodes/s)",
        elapsed.as_secs_f64(),
        nodes as f64 / elapsed.as_secs_f64().max(1e-9)
    );
    Ok(())
}
