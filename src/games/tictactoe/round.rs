//! State of one round: board, move history, and who opened.

use super::action::{Move, MoveError};
use super::invariants::assert_invariants;
use super::rules::classify;
use super::{Board, MoveResult, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A round in progress or just finished.
///
/// Only [`Round::place`] mutates it, so the board and the history never
/// drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub(super) board: Board,
    pub(super) history: Vec<Move>,
    pub(super) first: Player,
}

impl Round {
    /// Creates an empty round opened by `first`.
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            first,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The player who made the first move.
    pub fn first(&self) -> Player {
        self.first
    }

    /// The player whose mark goes down next.
    pub fn to_move(&self) -> Player {
        if self.history.len() % 2 == 0 {
            self.first
        } else {
            self.first.opponent()
        }
    }

    /// Places the next mark at `index` and classifies the result.
    ///
    /// # Errors
    ///
    /// Out-of-range and occupied cells are rejected without touching
    /// the round.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn place(&mut self, index: usize) -> Result<MoveResult, MoveError> {
        let player = self.to_move();
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        self.board = self.board.apply_move(index, player)?;
        self.history.push(Move::new(player, position));

        assert_invariants(self);

        let result = classify(&self.board);
        debug!(%position, ?result, "Mark placed");
        Ok(result)
    }

    /// Replays `indices` on a fresh round, stopping at the first
    /// terminal result.
    #[instrument]
    pub fn replay(first: Player, indices: &[usize]) -> Result<(Round, MoveResult), MoveError> {
        let mut round = Round::new(first);
        let mut result = MoveResult::Continue;
        for &index in indices {
            result = round.place(index)?;
            if result.is_terminal() {
                break;
            }
        }
        Ok((round, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    #[test]
    fn test_alternates_from_first() {
        let mut round = Round::new(Player::O);
        assert_eq!(round.to_move(), Player::O);
        round.place(4).unwrap();
        assert_eq!(round.to_move(), Player::X);
        assert_eq!(round.board().get(Position::Center), Square::Occupied(Player::O));
    }

    #[test]
    fn test_rejected_move_leaves_round() {
        let mut round = Round::new(Player::X);
        round.place(0).unwrap();
        let before = round.clone();
        assert_eq!(round.place(0), Err(MoveError::SquareOccupied(Position::TopLeft)));
        assert_eq!(round.place(12), Err(MoveError::OutOfRange(12)));
        assert_eq!(round, before);
    }

    #[test]
    fn test_replay_stops_at_win() {
        let (round, result) = Round::replay(Player::X, &[0, 4, 1, 8, 2, 5]).unwrap();
        assert_eq!(result, MoveResult::Win(Player::X));
        assert_eq!(round.history().len(), 5);
    }
}
