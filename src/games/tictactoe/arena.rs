//! Computer-vs-computer rounds.

use super::action::{Move, MoveError};
use super::policy::{Difficulty, choose_move};
use super::round::Round;
use super::{Outcome, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A finished self-play round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedRound {
    /// How the round ended.
    pub outcome: Outcome,
    /// Every move, in order.
    pub moves: Vec<Move>,
}

/// Plays one round where each mark follows its own difficulty.
///
/// # Errors
///
/// Only if a policy proposes an illegal cell, which the policies never do.
#[instrument(skip(rng))]
pub fn self_play<R: Rng + ?Sized>(
    first: Player,
    x: Difficulty,
    o: Difficulty,
    rng: &mut R,
) -> Result<PlayedRound, MoveError> {
    let mut round = Round::new(first);
    loop {
        let player = round.to_move();
        let difficulty = match player {
            Player::X => x,
            Player::O => o,
        };
        let Some(position) = choose_move(round.board(), player, difficulty, rng) else {
            // Unreachable for a round that has not been classified terminal.
            return Ok(PlayedRound {
                outcome: Outcome::Tie,
                moves: round.history().to_vec(),
            });
        };

        if let Some(outcome) = round.place(position.to_index())?.outcome() {
            info!(%outcome, moves = round.history().len(), "Self-play round finished");
            return Ok(PlayedRound {
                outcome,
                moves: round.history().to_vec(),
            });
        }
    }
}
