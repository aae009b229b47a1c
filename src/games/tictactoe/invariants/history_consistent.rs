//! History consistency invariant: history matches the occupied squares.

use super::super::round::Round;
use super::super::Square;
use super::Invariant;

/// Invariant: every move in history holds its mark on the board, and
/// the number of occupied squares equals the number of moves.
pub struct HistoryConsistentInvariant;

impl Invariant<Round> for HistoryConsistentInvariant {
    fn holds(round: &Round) -> bool {
        let board = round.board();
        round.history().len() == board.filled()
            && round
                .history()
                .iter()
                .all(|mv| board.get(mv.position) == Square::Occupied(mv.player))
    }

    fn description() -> &'static str {
        "History matches occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    #[test]
    fn test_replayed_round_holds() {
        let (round, _) = Round::replay(Player::X, &[4, 0, 8, 2]).unwrap();
        assert!(HistoryConsistentInvariant::holds(&round));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let (mut round, _) = Round::replay(Player::X, &[4, 0]).unwrap();
        round.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&round));
    }
}
