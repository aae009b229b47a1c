//! First-class invariants for a tic-tac-toe round.
//!
//! Invariants are logical properties that must hold after every move.
//! They are testable independently and checked in debug builds.

use super::round::Round;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod history_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;

/// All round invariants as a composable set.
pub type RoundInvariants = (AlternatingTurnInvariant, HistoryConsistentInvariant);

/// Asserts that all round invariants hold (debug builds only).
pub fn assert_invariants(round: &Round) {
    if cfg!(debug_assertions) {
        if let Err(violations) = RoundInvariants::check_all(round) {
            for violation in &violations {
                warn!(description = %violation.description, "Round invariant violated");
            }
            debug_assert!(violations.is_empty(), "Round invariants violated: {violations:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_empty_round() {
        let round = Round::new(Player::X);
        assert!(RoundInvariants::check_all(&round).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let (round, _) = Round::replay(Player::O, &[0, 4, 2]).unwrap();
        assert!(RoundInvariants::check_all(&round).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut round = Round::new(Player::X);
        round.place(4).unwrap();

        // Corrupt the board behind the history's back
        round.board.set(Position::TopLeft, Square::Occupied(Player::X));

        let violations = RoundInvariants::check_all(&round).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
