//! Command-line arguments

use std::path::PathBuf;

use chess_engine::constants::STARTING_POSITION_FEN;
use chess_engine::Color;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Play chess in the terminal against a UCI engine
#[derive(Debug, Parser)]
#[command(name = "magnus", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play a game against the engine
    Play(PlayArgs),

    /// Count the leaf nodes of the legal move tree
    Perft {
        /// Depth in plies
        #[arg(short, long)]
        depth: u32,

        /// Position to start from
        #[arg(short, long, default_value = STARTING_POSITION_FEN)]
        fen: String,

        /// Print the count below each root move
        #[arg(long)]
        divide: bool,
    },
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Engine executable (overrides the config file)
    #[arg(short, long)]
    pub engine: Option<PathBuf>,

    /// Engine think time per move in milliseconds
    #[arg(short, long)]
    pub movetime: Option<u64>,

    /// Side you play
    #[arg(short, long, value_enum)]
    pub color: Option<Side>,

    /// Start from this position instead of the initial one
    #[arg(long)]
    pub fen: Option<String>,

    /// JSON settings file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}
