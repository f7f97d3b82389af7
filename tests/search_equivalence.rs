//! Alpha-beta must agree with plain minimax on both score and chosen action.

use xrudder::eval::HeuristicWeights;
use xrudder::search::Searcher;
use xrudder::{Action, Board, GameState, Player, PlayerId, Pos, Side, MAX_SCORE, MIN_SCORE};

/// Unpruned reference with the same leaf rules and tie-breaking.
fn minimax(
    state: &GameState,
    maximizing: bool,
    depth: u8,
    weights: &HeuristicWeights,
) -> (i64, Option<Action>) {
    if let Some(score) = state.terminal_score() {
        return (score, None);
    }
    if depth == 0 {
        return (state.heuristic_score(weights), None);
    }
    let side = if maximizing { Side::Max } else { Side::Min };
    let actions = state.legal_actions(side, maximizing);
    let mut best_score = if maximizing { MIN_SCORE } else { MAX_SCORE };
    let mut best_action = None;
    for action in actions {
        let child = state.apply(action, side).unwrap();
        let (score, _) = minimax(&child, !maximizing, depth - 1, weights);
        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if best_action.is_none() || improves {
            best_score = score;
            best_action = Some(action);
        }
    }
    (best_score, best_action)
}

fn position(tokens: u8, moves: u32, max: &[(i32, i32)], min: &[(i32, i32)]) -> GameState {
    let mut state = GameState::new(
        Board::new(),
        moves,
        [
            Player::new(PlayerId(1), 'X', tokens),
            Player::new(PlayerId(2), 'O', tokens),
        ],
    );
    for &(x, y) in max {
        state.apply_mut(Action::Add(Pos::new(x, y)), Side::Max).unwrap();
    }
    for &(x, y) in min {
        state.apply_mut(Action::Add(Pos::new(x, y)), Side::Min).unwrap();
    }
    state
}

fn assert_equivalent(state: &GameState, depth: u8) {
    let weights = HeuristicWeights::default();
    let (expected_score, expected_action) = minimax(state, true, depth, &weights);

    let mut searcher = Searcher::new(weights);
    let result = searcher.search(state, depth).unwrap();
    assert_eq!(result.score, expected_score, "score at depth {depth}");
    assert_eq!(result.best_action, expected_action, "action at depth {depth}");
}

#[test]
fn opening_reply() {
    let state = position(15, 30, &[(6, 5)], &[(7, 6)]);
    for depth in 1..=3 {
        assert_equivalent(&state, depth);
    }
}

#[test]
fn middle_game() {
    let state = position(
        15,
        30,
        &[(6, 5), (5, 4), (7, 4)],
        &[(7, 6), (5, 6), (8, 5)],
    );
    for depth in 1..=3 {
        assert_equivalent(&state, depth);
    }
}

#[test]
fn threat_on_the_board() {
    // Max is one arm short of an X; min must answer.
    let state = position(
        15,
        30,
        &[(5, 5), (4, 4), (6, 4)],
        &[(8, 8), (9, 7), (10, 8)],
    );
    for depth in 1..=3 {
        assert_equivalent(&state, depth);
    }
}

#[test]
fn relocation_phase() {
    // Eight tokens left: the max side also considers relocations.
    let state = position(
        10,
        12,
        &[(6, 5), (5, 4)],
        &[(7, 6), (4, 3)],
    );
    assert!(state.max_player().tokens_left() <= 8);
    for depth in 1..=2 {
        assert_equivalent(&state, depth);
    }
}

#[test]
fn out_of_moves() {
    let state = position(15, 0, &[(6, 5)], &[(7, 6)]);
    for depth in 1..=3 {
        assert_equivalent(&state, depth);
    }
}
