//! tictactoe_minimax - terminal front end
//!
//! A thin adapter over the library: reads moves from stdin, prints the
//! board and the scoreboard.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use tictactoe_minimax::{
    Board, Difficulty, EngineConfig, FixedDelay, GameSession, HUMAN, MoveResult, Phase, Player,
    Position, classify, drive_reply, search_counted, self_play,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = EngineConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Play {
            difficulty,
            first,
            delay_ms,
            seed,
        } => {
            let mut config = config;
            if let Some(difficulty) = difficulty {
                config = config.with_difficulty(difficulty);
            }
            if let Some(first) = first {
                config = config.with_first_player(first);
            }
            if let Some(delay_ms) = delay_ms {
                config = config.with_reply_delay_ms(delay_ms);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            run_play(config)
        }
        Command::SelfPlay { rounds, x, o, seed } => {
            run_self_play(rounds, x, o, seed.or(*config.seed()))
        }
        Command::Suggest { board, player } => run_suggest(&board, player),
    }
}

/// Interactive human-vs-computer loop.
#[instrument(skip(config))]
fn run_play(config: EngineConfig) -> Result<()> {
    info!("Starting interactive session");
    let pacer = FixedDelay(config.reply_delay());
    let mut session = GameSession::new(config.session_settings());
    let mut out = io::stdout().lock();

    writeln!(
        out,
        "You are X. Enter 1-9 to play, h for a hint, easy/medium/hard to change \
         difficulty, r for a new round, R to reset the score, q to quit."
    )?;
    reply_and_render(&mut session, &pacer, &mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input")?;
        match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "r" => session.new_round(),
            "R" => session.full_reset(),
            "h" | "hint" => match session.suggest_move(Difficulty::Hard) {
                Some(pos) => writeln!(out, "Hint: {} ({})", pos.to_index() + 1, pos)?,
                None => writeln!(out, "The round is over.")?,
            },
            input => {
                if let Ok(difficulty) = input.parse::<Difficulty>() {
                    session.set_difficulty(difficulty);
                    writeln!(out, "Difficulty: {}", difficulty)?;
                } else if let Some(pos) = Position::from_label_or_number(input) {
                    if let Err(e) = session.apply_human_move(pos.to_index()) {
                        writeln!(out, "{}", e)?;
                    }
                } else {
                    writeln!(out, "Unrecognized input {:?}", input)?;
                }
            }
        }
        reply_and_render(&mut session, &pacer, &mut out)?;
    }

    writeln!(out, "Final score: {}", session.scoreboard())?;
    Ok(())
}

fn reply_and_render(
    session: &mut GameSession,
    pacer: &FixedDelay,
    out: &mut impl Write,
) -> Result<()> {
    if session.phase() == Phase::ComputingReply {
        writeln!(out, "Computer is thinking...")?;
        out.flush()?;
    }
    if let Some(reply) = drive_reply(session, pacer)? {
        writeln!(out, "Computer plays {} ({})", reply.position.to_index() + 1, reply.position)?;
    }

    writeln!(out, "\n{}\n", session.board_snapshot())?;
    match session.phase() {
        Phase::AwaitingHumanMove => writeln!(out, "Your move ({}).", session.difficulty())?,
        Phase::ComputingReply => {}
        Phase::RoundOver(outcome) => {
            let message = match outcome.winner() {
                Some(HUMAN) => "You win!".to_string(),
                Some(_) => "Computer wins.".to_string(),
                None => outcome.to_string(),
            };
            writeln!(out, "{} Press r for a new round.", message)?;
        }
    }
    writeln!(out, "{}", session.scoreboard())?;
    Ok(())
}

/// Computer-vs-computer rounds with a tally.
#[instrument]
fn run_self_play(rounds: u32, x: Difficulty, o: Difficulty, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (mut x_wins, mut o_wins, mut ties) = (0u32, 0u32, 0u32);
    for round in 0..rounds {
        // Alternate the opener so neither side always moves first.
        let first = if round % 2 == 0 { Player::X } else { Player::O };
        let played =
            self_play(first, x, o, &mut rng).context("Self-play produced an illegal move")?;
        match played.outcome.winner() {
            Some(Player::X) => x_wins += 1,
            Some(Player::O) => o_wins += 1,
            None => ties += 1,
        }
    }

    println!("X ({}) wins: {}", x, x_wins);
    println!("O ({}) wins: {}", o, o_wins);
    println!("Ties: {}", ties);
    Ok(())
}

/// Prints the searched best move for a board.
#[instrument]
fn run_suggest(board: &str, player: Option<Player>) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    println!("{}\n", board);

    if classify(&board) != MoveResult::Continue {
        println!("Board is already terminal: {:?}", classify(&board));
        return Ok(());
    }

    let player = player.unwrap_or(if board.count(Player::X) <= board.count(Player::O) {
        Player::X
    } else {
        Player::O
    });
    let (result, nodes) = search_counted(&board, player);
    match result.position {
        Some(pos) => println!(
            "{} should play {} ({}), score {}, {} nodes searched",
            player,
            pos.to_index() + 1,
            pos,
            result.score,
            nodes
        ),
        None => println!("No move available"),
    }
    Ok(())
}
