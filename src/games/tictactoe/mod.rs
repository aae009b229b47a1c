mod action;
mod arena;
mod invariants;
mod phases;
mod policy;
mod position;
mod round;
mod rules;
mod scoreboard;
mod search;
mod types;

pub use action::{Move, MoveError};
pub use arena::{PlayedRound, self_play};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, RoundInvariants,
};
pub use phases::{MoveResult, Outcome, Phase};
pub use policy::{Difficulty, MEDIUM_SEARCH_PROBABILITY, choose_move, random_move};
pub use position::Position;
pub use round::Round;
pub use rules::{
    Evaluation, WIN_LINES, check_winner, classify, evaluate, is_draw, is_full, winning_line,
};
pub use scoreboard::Scoreboard;
pub use search::{LOSS_SCORE, SearchResult, TIE_SCORE, WIN_SCORE, search, search_counted};
pub use types::{Board, BoardParseError, Player, Square};
