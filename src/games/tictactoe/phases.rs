//! Round outcomes, per-move results, and the session turn phase.

use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a triple.
    Win(Player),
    /// Board filled with no triple.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::Tie => None,
        }
    }

}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{} wins", player),
            Outcome::Tie => write!(f, "It's a tie"),
        }
    }
}

/// Where the session is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human's move.
    AwaitingHumanMove,
    /// The computer's reply is due; no human input is accepted.
    ComputingReply,
    /// The round is over; only a new round or full reset is accepted.
    RoundOver(Outcome),
}

/// Result of applying one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// Round goes on.
    Continue,
    /// The mover completed a triple.
    Win(Player),
    /// Board is full with no triple.
    Tie,
}

impl MoveResult {
    /// The terminal outcome, or `None` while the round continues.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            MoveResult::Continue => None,
            MoveResult::Win(player) => Some(Outcome::Win(*player)),
            MoveResult::Tie => Some(Outcome::Tie),
        }
    }

    /// True unless the round continues.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveResult::Continue)
    }
}
