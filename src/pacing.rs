//! Pacing for computer replies.
//!
//! A short pause before the reply lets a front end show that it is the
//! computer's turn. It has no effect on the game itself.

use crate::games::tictactoe::MoveError;
use crate::session::{GameSession, Phase, Reply};
use std::time::Duration;
use tracing::{debug, instrument};

/// Default delay before a computer reply.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(300);

/// Decides how long to wait before a reply is computed.
pub trait ReplyPacer {
    /// Blocks until the reply may be computed.
    fn pause(&self);
}

/// Replies immediately. Used by tests and self-play.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl ReplyPacer for NoDelay {
    fn pause(&self) {}
}

/// Sleeps for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl Default for FixedDelay {
    fn default() -> Self {
        Self(DEFAULT_REPLY_DELAY)
    }
}

impl ReplyPacer for FixedDelay {
    fn pause(&self) {
        std::thread::sleep(self.0);
    }
}

/// Plays the computer's reply if one is due, pausing on `pacer` first.
///
/// Returns `Ok(None)` when no reply is due.
#[instrument(skip(session, pacer), fields(phase = ?session.phase()))]
pub fn drive_reply<P: ReplyPacer + ?Sized>(
    session: &mut GameSession,
    pacer: &P,
) -> Result<Option<Reply>, MoveError> {
    if session.phase() != Phase::ComputingReply {
        return Ok(None);
    }
    debug!("Pausing before reply");
    pacer.pause();
    session.advance().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Difficulty;
    use crate::settings::SessionSettings;
    use std::cell::Cell;

    struct CountingPacer(Cell<u32>);

    impl ReplyPacer for CountingPacer {
        fn pause(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_pauses_only_when_reply_due() {
        let settings = SessionSettings::default()
            .with_difficulty(Difficulty::Easy)
            .with_seed(9);
        let mut session = GameSession::new(settings);
        let pacer = CountingPacer(Cell::new(0));

        assert_eq!(drive_reply(&mut session, &pacer), Ok(None));
        assert_eq!(pacer.0.get(), 0);

        session.apply_human_move(4).unwrap();
        let reply = drive_reply(&mut session, &pacer).unwrap();
        assert!(reply.is_some());
        assert_eq!(pacer.0.get(), 1);
        assert_eq!(session.phase(), Phase::AwaitingHumanMove);
    }
}
