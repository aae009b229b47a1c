//! Exhaustive minimax search.
//!
//! Scores are from the searching player's point of view and are not
//! discounted by depth: a win is a win no matter how far away it is.
//! Every branch works on its own copy of the board.

use super::rules::{Evaluation, evaluate, is_full};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, instrument};

/// Score of a position the searching player wins.
pub const WIN_SCORE: i32 = 10;
/// Score of a position the searching player loses.
pub const LOSS_SCORE: i32 = -10;
/// Score of a tied position.
pub const TIE_SCORE: i32 = 0;

/// Best move found and its game-theoretic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best cell, or `None` when the board was already terminal.
    pub position: Option<Position>,
    /// One of [`WIN_SCORE`], [`TIE_SCORE`], [`LOSS_SCORE`].
    pub score: i32,
}

impl SearchResult {
    fn terminal(score: i32) -> Self {
        Self {
            position: None,
            score,
        }
    }
}

/// Finds the best move for `searching`, who is to move on `board`,
/// assuming optimal play from both sides.
///
/// Equal scores keep the lowest cell index. On a terminal board the
/// result carries no position.
#[instrument(skip(board), fields(filled = board.filled()))]
pub fn search(board: &Board, searching: Player) -> SearchResult {
    search_counted(board, searching).0
}

/// Like [`search`], also returning the number of visited nodes.
pub fn search_counted(board: &Board, searching: Player) -> (SearchResult, u64) {
    let started = Instant::now();
    let mut minimax = Minimax { searching, nodes: 0 };
    let result = minimax.run(*board, searching);

    debug!(
        player = %searching,
        position = ?result.position,
        score = result.score,
        nodes = minimax.nodes,
        elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        "Search finished"
    );
    (result, minimax.nodes)
}

struct Minimax {
    searching: Player,
    nodes: u64,
}

impl Minimax {
    fn run(&mut self, board: Board, to_move: Player) -> SearchResult {
        self.nodes += 1;

        // Base cases, always in this order.
        if evaluate(&board, self.searching.opponent()) == Evaluation::Win {
            return SearchResult::terminal(LOSS_SCORE);
        }
        if evaluate(&board, self.searching) == Evaluation::Win {
            return SearchResult::terminal(WIN_SCORE);
        }
        if is_full(&board) {
            return SearchResult::terminal(TIE_SCORE);
        }

        let maximizing = to_move == self.searching;
        let mut best: Option<SearchResult> = None;

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            let score = self.run(board.with_mark(pos, to_move), to_move.opponent()).score;

            let improves = match best {
                None => true,
                Some(current) if maximizing => score > current.score,
                Some(current) => score < current.score,
            };
            if improves {
                best = Some(SearchResult {
                    position: Some(pos),
                    score,
                });
            }
        }

        // Not full, so at least one branch was explored.
        best.unwrap_or(SearchResult::terminal(TIE_SCORE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_immediate_win() {
        // O to move, O holds 3 and 6: 0 wins the left column.
        let board: Board = "... O X. OXX".parse().unwrap();
        let result = search(&board, Player::O);
        assert_eq!(result.position, Some(Position::TopLeft));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_open_row() {
        // X threatens the top row; O must take 2.
        let board: Board = "XX. .O. ...".parse().unwrap();
        let result = search(&board, Player::O);
        assert_eq!(result.position, Some(Position::TopRight));
        assert_eq!(result.score, TIE_SCORE);
    }

    #[test]
    fn test_terminal_board_has_no_position() {
        let won: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(search(&won, Player::O), SearchResult::terminal(LOSS_SCORE));
        assert_eq!(search(&won, Player::X), SearchResult::terminal(WIN_SCORE));

        let full: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(search(&full, Player::X), SearchResult::terminal(TIE_SCORE));
    }

    #[test]
    fn test_ties_keep_lowest_index() {
        // Against a center opening every corner ties and every edge
        // loses; the first corner in index order is kept.
        let board: Board = "... .X. ...".parse().unwrap();
        let result = search(&board, Player::O);
        assert_eq!(result.score, TIE_SCORE);
        assert_eq!(result.position, Some(Position::TopLeft));
    }
}
