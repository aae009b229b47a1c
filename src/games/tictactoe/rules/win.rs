//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// The 8 winning triples: rows, columns, diagonals.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Whether a mark holds a complete triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// At least one triple is entirely this mark.
    Win,
    /// No triple is entirely this mark.
    NoWin,
}

/// Checks the acting mark only.
pub fn evaluate(board: &Board, player: Player) -> Evaluation {
    let mark = Square::Occupied(player);
    let won = WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == mark));
    if won {
        Evaluation::Win
    } else {
        Evaluation::NoWin
    }
}

/// Returns the first completed triple, if any.
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    WIN_LINES.iter().copied().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).player())
}
