//! Difficulty-based move selection for the computer player.

use super::search::search;
use super::{Board, Player, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How the computer picks its moves.
///
/// Difficulty changes the selection policy, never the search depth.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    Easy,
    /// Coin flip between the search result and a random cell, per move.
    Medium,
    /// Always the search result.
    #[default]
    Hard,
}

/// Probability that a medium move uses the search result.
pub const MEDIUM_SEARCH_PROBABILITY: f64 = 0.5;

/// Picks a move for `player` on `board`.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(board, rng), fields(player = %player))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    let chosen = match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => {
            if rng.random_bool(MEDIUM_SEARCH_PROBABILITY) {
                search(board, player).position
            } else {
                random_move(board, rng)
            }
        }
        Difficulty::Hard => search(board, player).position,
    };
    debug!(?chosen, "Move chosen");
    chosen
}

/// Uniformly random empty cell.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let available = board.empty_positions();
    if available.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available.len());
    Some(available[idx])
}
