//! Per-process tally of finished rounds.

use super::{Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Round counters. Lives as long as the session; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds won by the human.
    human_wins: u32,
    /// Rounds won by the computer.
    ai_wins: u32,
    /// Tied rounds.
    ties: u32,
    /// Finished rounds.
    rounds_played: u32,
}

impl Scoreboard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tallies one finished round.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome, human: Player) {
        match outcome.winner() {
            Some(winner) if winner == human => self.human_wins += 1,
            Some(_) => self.ai_wins += 1,
            None => self.ties += 1,
        }
        self.rounds_played += 1;
        info!(
            human_wins = self.human_wins,
            ai_wins = self.ai_wins,
            ties = self.ties,
            rounds_played = self.rounds_played,
            "Scoreboard updated"
        );
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You {} | Computer {} | Ties {} | Round {}",
            self.human_wins, self.ai_wins, self.ties, self.rounds_played
        )
    }
}
