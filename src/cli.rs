//! Command-line interface for tictactoe_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_minimax::{Difficulty, FirstPlayer, Player};

/// Tic-tac-toe against an exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_minimax")]
#[command(about = "Play tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer on the terminal
    Play {
        /// Difficulty: easy, medium, or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Who opens each round: human or ai
        #[arg(long)]
        first: Option<FirstPlayer>,

        /// Pause before computer replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// RNG seed for reproducible play
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let two computer players play each other
    SelfPlay {
        /// Number of rounds
        #[arg(short, long, default_value = "10")]
        rounds: u32,

        /// Difficulty for X
        #[arg(short = 'x', long = "x-difficulty", default_value = "hard")]
        x: Difficulty,

        /// Difficulty for O
        #[arg(short = 'o', long = "o-difficulty", default_value = "hard")]
        o: Difficulty,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the best move for a board, e.g. "XX. .O. ..."
    Suggest {
        /// Nine cells of X, O, or . (spaces and | are ignored)
        board: String,

        /// Player to move; inferred from mark counts when omitted
        #[arg(short, long, value_parser = parse_player)]
        player: Option<Player>,
    },
}

fn parse_player(s: &str) -> Result<Player, String> {
    match s.trim().to_ascii_uppercase().as_str() {
        "X" => Ok(Player::X),
        "O" => Ok(Player::O),
        other => Err(format!("expected X or O, got {:?}", other)),
    }
}
