//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search and the session share one definition.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Evaluation, WIN_LINES, check_winner, evaluate, winning_line};

use super::{Board, MoveResult};

/// Classifies a board: a win for either mark takes priority over a tie,
/// and a tie needs a full board.
pub fn classify(board: &Board) -> MoveResult {
    if let Some(winner) = check_winner(board) {
        MoveResult::Win(winner)
    } else if is_full(board) {
        MoveResult::Tie
    } else {
        MoveResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    #[test]
    fn test_win_beats_full_board() {
        // X completes the top row on the last empty square.
        let board: Board = "XXX OOX OXO".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(classify(&board), MoveResult::Win(Player::X));
    }

    #[test]
    fn test_classify_continue_and_tie() {
        assert_eq!(classify(&Board::new()), MoveResult::Continue);
        let board: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(classify(&board), MoveResult::Tie);
    }
}
