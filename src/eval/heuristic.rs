//! Heuristic evaluation function for X-Rudder positions
//!
//! The score is always from the max side's perspective (player index 0 of the
//! [`GameState`]). It rewards tokens that could still become part of an X and
//! partially built X shapes, and it penalises the max side for drifting into
//! the relocation phase. The opponent is mirrored with the per-token part
//! only; the phase penalty and strategy scan apply to the max side alone.

use crate::board::{Board, PlayerId, Pos};
use crate::state::GameState;

use super::patterns::{HeuristicWeights, ROLE_OFFSETS};

/// Evaluate a non-terminal state for the max side.
#[must_use]
pub fn heuristic_score(state: &GameState, weights: &HeuristicWeights) -> i64 {
    let board = state.board();
    let max = state.max_player();
    let min = state.min_player();

    let in_relocation_phase = state.in_relocation_phase(max);
    let max_tokens = max.used_tokens().len() as i64;

    let mut max_score = 0i64;
    for &token in max.used_tokens() {
        max_score += weights.token;
        if in_relocation_phase {
            max_score -= weights.relocation_phase_penalty * max_tokens;
        }
        max_score += potential_wins(board, token, max.id(), weights);
    }
    max_score += win_strategy(board, max.id(), weights) * weights.strategy_multiplier;

    let min_score: i64 = min
        .used_tokens()
        .iter()
        .map(|&token| weights.token + potential_wins(board, token, min.id(), weights))
        .sum();

    max_score - min_score
}

/// Sum of the five role scores for a token owned by `owner`.
#[must_use]
pub fn potential_wins(board: &Board, token: Pos, owner: PlayerId, weights: &HeuristicWeights) -> i64 {
    ROLE_OFFSETS
        .iter()
        .map(|role| role_score(board, token, role, owner, weights))
        .sum()
}

/// Score the four other cells of one X role.
fn role_score(
    board: &Board,
    token: Pos,
    role: &[(i32, i32); 4],
    owner: PlayerId,
    weights: &HeuristicWeights,
) -> i64 {
    let mut score = 0i64;
    let mut bonus = weights.own_bonus_start;
    let mut penalty = weights.opponent_penalty_start;

    for &(dx, dy) in role {
        let pos = token.offset(dx, dy);
        if !board.in_bounds(pos) {
            score -= weights.out_of_bounds_penalty;
            continue;
        }
        match board.owner(pos) {
            Some(id) if id == owner => {
                score += bonus;
                bonus = bonus.saturating_add(bonus);
            }
            Some(_) => {
                score = score.saturating_sub(penalty);
                penalty = penalty.saturating_mul(penalty);
            }
            None => score += bonus,
        }
    }
    score
}

/// Horizontal scan for partially built X shapes belonging to `owner`.
///
/// Looks at every row with two rows of headroom above it for cells spaced two
/// apart: `x`, `x+2`, `x+4`, with arms at `x+1`/`x+3` one row up and the apex
/// at `x+2` two rows up.
#[must_use]
pub fn win_strategy(board: &Board, owner: PlayerId, weights: &HeuristicWeights) -> i64 {
    let own = |x: i32, y: i32| board.owner(Pos::new(x, y)) == Some(owner);
    let mut score = 0i64;

    for y in 1..=board.height() - 3 {
        for x in 1..=board.width() - 5 {
            if own(x, y) && own(x + 2, y) && own(x + 4, y) {
                score += weights.strategy_triple;
                let left_arm = own(x + 1, y + 1);
                let right_arm = own(x + 3, y + 1);
                if left_arm && right_arm {
                    score += weights.strategy_both_arms;
                    if own(x + 2, y + 2) {
                        score += weights.strategy_apex;
                    }
                } else if left_arm || right_arm {
                    score += weights.strategy_one_arm;
                }
            } else if (own(x, y) && own(x + 2, y)) || (own(x + 2, y) && own(x + 4, y)) {
                score += weights.strategy_pair;
            }
        }
    }
    score
}
