//! Tic-tac-toe engine with an exhaustive minimax opponent.
//!
//! The library holds the whole game: board state, win and tie rules,
//! the minimax search, difficulty policies, and a session that runs
//! human-vs-computer rounds and keeps score. Rendering and input belong
//! to whatever front end drives a [`GameSession`].
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a [`Board`] value
//! - **Search**: full-depth minimax, scores in {-10, 0, +10}
//! - **Policy**: [`Difficulty`] picks between random and searched moves
//! - **Session**: turn state machine and [`Scoreboard`]
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{Difficulty, GameSession, MoveResult, Phase, SessionSettings};
//!
//! let settings = SessionSettings::default()
//!     .with_difficulty(Difficulty::Easy)
//!     .with_seed(1);
//! let mut session = GameSession::new(settings);
//!
//! assert_eq!(session.apply_human_move(4), Ok(MoveResult::Continue));
//! assert_eq!(session.phase(), Phase::ComputingReply);
//!
//! let reply = session.advance().unwrap();
//! assert!(!session.board_snapshot().is_empty(reply.position));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod pacing;
mod session;
mod settings;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};
pub use settings::{FirstPlayer, SessionSettings};

// Crate-level exports - Session
pub use pacing::{DEFAULT_REPLY_DELAY, FixedDelay, NoDelay, ReplyPacer, drive_reply};
pub use session::{AI, GameSession, HUMAN, Phase, Reply};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, BoardParseError, Difficulty, Evaluation,
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation, LOSS_SCORE,
    MEDIUM_SEARCH_PROBABILITY, Move, MoveError, MoveResult, Outcome, PlayedRound, Player,
    Position, Round, RoundInvariants, Scoreboard, SearchResult, Square, TIE_SCORE, WIN_LINES,
    WIN_SCORE, check_winner, choose_move, classify, evaluate, is_draw, is_full, random_move,
    search, search_counted, self_play, winning_line,
};
