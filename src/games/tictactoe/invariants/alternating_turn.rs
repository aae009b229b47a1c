//! Alternating turn invariant: marks alternate starting with the opener.

use super::super::round::Round;
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// History starts with the round's opener and never repeats a player;
/// on the board the opener has the same number of marks as the other
/// player, or one more.
pub struct AlternatingTurnInvariant;

impl Invariant<Round> for AlternatingTurnInvariant {
    fn holds(round: &Round) -> bool {
        let history = round.history();

        if history.first().is_some_and(|mv| mv.player != round.first()) {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        let opener = round.board().count(round.first());
        let second = round.board().count(round.first().opponent());
        opener == second || opener == second + 1
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the opener"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position, Square};

    #[test]
    fn test_empty_round_holds() {
        assert!(AlternatingTurnInvariant::holds(&Round::new(Player::X)));
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut round = Round::new(Player::X);
        round.place(4).unwrap();
        assert!(AlternatingTurnInvariant::holds(&round));

        round.board.set(Position::TopLeft, Square::Occupied(Player::X));
        assert!(!AlternatingTurnInvariant::holds(&round));
    }
}
