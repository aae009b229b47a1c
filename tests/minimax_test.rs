//! Tests for the minimax search and the difficulty policies.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_minimax::{
    Board, Difficulty, LOSS_SCORE, Outcome, Player, Position, TIE_SCORE, WIN_SCORE, choose_move,
    search, self_play,
};

#[test]
fn test_hard_against_hard_always_ties() {
    let mut rng = StdRng::seed_from_u64(0);
    for first in [Player::X, Player::O] {
        let played = self_play(first, Difficulty::Hard, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(played.outcome, Outcome::Tie);
        assert_eq!(played.moves.len(), 9);
    }
}

#[test]
fn test_center_opening_never_loses() {
    let searching = Player::O;
    let opened = Board::new().apply_move(4, searching).unwrap();

    for reply in Position::valid_moves(&opened) {
        let board = opened.apply_move(reply.to_index(), searching.opponent()).unwrap();
        let result = search(&board, searching);
        assert_ne!(result.score, LOSS_SCORE, "after reply {reply}");
    }
}

#[test]
fn test_search_prefers_win_over_block() {
    // O to move can win on 5 (middle row) or block X on 2; winning is better.
    let board: Board = "XX. OO. X..".parse().unwrap();
    let result = search(&board, Player::O);
    assert_eq!(result.position, Some(Position::MiddleRight));
    assert_eq!(result.score, WIN_SCORE);
}

#[test]
fn test_search_sees_forced_loss() {
    // X threatens 2, 7 and 8; O can block only one.
    let board: Board = "XX. OX. O..".parse().unwrap();
    let result = search(&board, Player::O);
    assert_eq!(result.score, LOSS_SCORE);
    // Every cell loses equally, so the lowest index is kept.
    assert_eq!(result.position, Some(Position::TopRight));
}

#[test]
fn test_open_board_is_a_tie() {
    let board: Board = "X.. ... ...".parse().unwrap();
    assert_eq!(search(&board, Player::O).score, TIE_SCORE);
}

#[test]
fn test_hard_policy_matches_search() {
    let board: Board = "X.. .O. ..X".parse().unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let expected = search(&board, Player::O).position;
    for _ in 0..3 {
        assert_eq!(choose_move(&board, Player::O, Difficulty::Hard, &mut rng), expected);
    }
}

#[test]
fn test_hard_never_loses_to_random() {
    let mut rng = StdRng::seed_from_u64(17);
    for round in 0..6 {
        let first = if round % 2 == 0 { Player::X } else { Player::O };
        let played = self_play(first, Difficulty::Easy, Difficulty::Hard, &mut rng).unwrap();
        assert_ne!(played.outcome, Outcome::Win(Player::X), "round {round}");
    }
}

#[test]
fn test_medium_mixes_policies() {
    // Over many draws on an open board, medium must sometimes pick the
    // searched cell and sometimes something else.
    let board: Board = "X.. ... ...".parse().unwrap();
    let best = search(&board, Player::O).position;
    let mut rng = StdRng::seed_from_u64(23);
    let picks: Vec<_> = (0..40)
        .map(|_| choose_move(&board, Player::O, Difficulty::Medium, &mut rng))
        .collect();
    assert!(picks.iter().all(|p| p.is_some_and(|pos| board.is_empty(pos))));
    assert!(picks.contains(&best));
    assert!(picks.iter().any(|p| *p != best));
}
