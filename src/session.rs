//! Game session: one human against the computer, round after round.
//!
//! The session owns the round and the scoreboard and walks a small state
//! machine:
//!
//! ```text
//! AwaitingHumanMove --human move--> ComputingReply --advance--> AwaitingHumanMove
//!         |                               |
//!         +-------- terminal -------------+--> RoundOver --new_round--> (opening phase)
//! ```
//!
//! Replies are never computed implicitly. The caller decides when to
//! [`GameSession::advance`], which is where any pacing delay belongs.

use crate::games::tictactoe::{
    Board, Difficulty, Move, MoveError, MoveResult, Outcome, Player, Position, Round, Scoreboard,
    choose_move, winning_line,
};
pub use crate::games::tictactoe::Phase;
use crate::settings::{FirstPlayer, SessionSettings};
use derive_new::new;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Mark played by the human.
pub const HUMAN: Player = Player::X;
/// Mark played by the computer.
pub const AI: Player = Player::O;

/// A reply move the computer made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Reply {
    /// Where the computer played.
    pub position: Position,
    /// What the move did to the round.
    pub result: MoveResult,
}

/// A human-vs-computer session.
#[derive(Debug, Clone)]
pub struct GameSession {
    round: Round,
    phase: Phase,
    settings: SessionSettings,
    scoreboard: Scoreboard,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session and starts its first round.
    #[instrument]
    pub fn new(settings: SessionSettings) -> Self {
        let rng = match settings.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        let first = settings.first_player().mark(HUMAN);
        info!(
            difficulty = %settings.difficulty(),
            first_player = %settings.first_player(),
            "Creating game session"
        );
        Self {
            round: Round::new(first),
            phase: Self::opening_phase(*settings.first_player()),
            settings,
            scoreboard: Scoreboard::new(),
            rng,
        }
    }

    fn opening_phase(first_player: FirstPlayer) -> Phase {
        match first_player {
            FirstPlayer::Human => Phase::AwaitingHumanMove,
            FirstPlayer::Ai => Phase::ComputingReply,
        }
    }

    /// Clears the board and starts a new round. The scoreboard is kept.
    ///
    /// An unfinished round is abandoned without being tallied. The round
    /// opens in `AwaitingHumanMove`, or in `ComputingReply` when the
    /// computer opens.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn new_round(&mut self) {
        let first_player = *self.settings.first_player();
        self.round = Round::new(first_player.mark(HUMAN));
        self.phase = Self::opening_phase(first_player);
        info!(phase = ?self.phase, "New round");
    }

    /// Clears the board and zeroes the scoreboard.
    ///
    /// Lands in the opening phase like [`GameSession::new_round`]:
    /// `AwaitingHumanMove`, or `ComputingReply` when the computer opens.
    #[instrument(skip(self))]
    pub fn full_reset(&mut self) {
        self.scoreboard.reset();
        self.new_round();
        info!("Session fully reset");
    }

    /// Applies the human's move at cell `index` (0-8).
    ///
    /// # Errors
    ///
    /// `InvalidState` unless the session is awaiting the human, and the
    /// invalid-move errors from the board. A rejected request changes
    /// nothing.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn apply_human_move(&mut self, index: usize) -> Result<MoveResult, MoveError> {
        if self.phase != Phase::AwaitingHumanMove {
            warn!(index, phase = ?self.phase, "Human move out of turn");
            return Err(MoveError::InvalidState(self.phase));
        }

        let result = self.round.place(index).inspect_err(|e| {
            warn!(index, error = %e, "Invalid human move");
        })?;
        self.after_move(result);
        Ok(result)
    }

    /// Makes the computer's reply with the session difficulty.
    pub fn advance(&mut self) -> Result<Reply, MoveError> {
        self.compute_reply(*self.settings.difficulty())
    }

    /// Makes the computer's reply with an explicit difficulty.
    ///
    /// # Errors
    ///
    /// `InvalidState` unless a reply is due.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn compute_reply(&mut self, difficulty: Difficulty) -> Result<Reply, MoveError> {
        if self.phase != Phase::ComputingReply {
            warn!(phase = ?self.phase, "No reply is due");
            return Err(MoveError::InvalidState(self.phase));
        }

        // A reply is only due on a non-terminal board, which has an empty cell.
        let position = choose_move(self.round.board(), AI, difficulty, &mut self.rng)
            .ok_or(MoveError::InvalidState(self.phase))?;
        let result = self.round.place(position.to_index())?;
        self.after_move(result);

        debug!(%position, ?result, "Computer replied");
        Ok(Reply::new(position, result))
    }

    /// Suggests a move for whoever is to move, without playing it.
    ///
    /// Returns `None` once the round is over.
    #[instrument(skip(self))]
    pub fn suggest_move(&mut self, difficulty: Difficulty) -> Option<Position> {
        if matches!(self.phase, Phase::RoundOver(_)) {
            return None;
        }
        choose_move(self.round.board(), self.round.to_move(), difficulty, &mut self.rng)
    }

    fn after_move(&mut self, result: MoveResult) {
        self.phase = match result.outcome() {
            Some(outcome) => {
                self.scoreboard.record(outcome, HUMAN);
                info!(%outcome, "Round over");
                Phase::RoundOver(outcome)
            }
            None if self.round.to_move() == HUMAN => Phase::AwaitingHumanMove,
            None => Phase::ComputingReply,
        };
    }

    /// Copy of the current board.
    pub fn board_snapshot(&self) -> Board {
        *self.round.board()
    }

    /// Round counters.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Moves of the current round.
    pub fn history(&self) -> &[Move] {
        self.round.history()
    }

    /// Outcome of the current round, once it is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::RoundOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// The completed triple, for highlighting a won round.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(self.round.board())
    }

    /// Difficulty used by [`GameSession::advance`].
    pub fn difficulty(&self) -> Difficulty {
        *self.settings.difficulty()
    }

    /// Changes the difficulty for later replies.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings = self.settings.with_difficulty(difficulty);
    }

    /// Settings the session runs with.
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(difficulty: Difficulty) -> GameSession {
        GameSession::new(SessionSettings::default().with_difficulty(difficulty).with_seed(11))
    }

    #[test]
    fn test_starts_awaiting_human() {
        let session = seeded(Difficulty::Hard);
        assert_eq!(session.phase(), Phase::AwaitingHumanMove);
        assert_eq!(session.board_snapshot(), Board::new());
    }

    #[test]
    fn test_human_move_hands_turn_to_computer() {
        let mut session = seeded(Difficulty::Hard);
        assert_eq!(session.apply_human_move(4), Ok(MoveResult::Continue));
        assert_eq!(session.phase(), Phase::ComputingReply);

        // No second human move while the reply is pending.
        assert_eq!(
            session.apply_human_move(0),
            Err(MoveError::InvalidState(Phase::ComputingReply))
        );

        let reply = session.advance().unwrap();
        assert_eq!(reply.result, MoveResult::Continue);
        assert_eq!(session.phase(), Phase::AwaitingHumanMove);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_advance_rejected_when_not_due() {
        let mut session = seeded(Difficulty::Easy);
        assert_eq!(
            session.advance(),
            Err(MoveError::InvalidState(Phase::AwaitingHumanMove))
        );
    }

    #[test]
    fn test_computer_opens_when_configured() {
        let settings = SessionSettings::default()
            .with_difficulty(Difficulty::Easy)
            .with_first_player(FirstPlayer::Ai)
            .with_seed(5);
        let mut session = GameSession::new(settings);
        assert_eq!(session.phase(), Phase::ComputingReply);

        let reply = session.advance().unwrap();
        assert_eq!(session.board_snapshot().count(AI), 1);
        assert_eq!(session.history()[0], Move::new(AI, reply.position));
        assert_eq!(session.phase(), Phase::AwaitingHumanMove);
    }
}
