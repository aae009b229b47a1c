//! Session settings: user-configurable preferences for a game session.

use crate::games::tictactoe::{Difficulty, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Which side takes the first move of each round.
///
/// Defaults to [`FirstPlayer::Human`] so the player moves first.
/// The human always plays X; the opener changes, not the marks.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FirstPlayer {
    /// The human opens.
    #[default]
    Human,
    /// The computer opens.
    Ai,
}

impl FirstPlayer {
    /// Mark that opens the round.
    pub fn mark(self, human: Player) -> Player {
        match self {
            Self::Human => human,
            Self::Ai => human.opponent(),
        }
    }
}

/// Settings a [`GameSession`](crate::GameSession) is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Reply policy for the computer.
    difficulty: Difficulty,
    /// Who opens each round.
    first_player: FirstPlayer,
    /// Fixed RNG seed; `None` seeds from the OS.
    seed: Option<u64>,
}

impl SessionSettings {
    /// Creates settings from their parts.
    pub fn new(difficulty: Difficulty, first_player: FirstPlayer, seed: Option<u64>) -> Self {
        Self {
            difficulty,
            first_player,
            seed,
        }
    }

    /// Replaces the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Replaces who opens.
    pub fn with_first_player(mut self, first_player: FirstPlayer) -> Self {
        self.first_player = first_player;
        self
    }

    /// Fixes the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
