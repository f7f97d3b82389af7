//! Heuristic weights and the X-pattern role geometry
//!
//! Weights are plain data and can be overridden from the `[heuristic]` config
//! section.

use serde::{Deserialize, Serialize};

/// Offsets a token must see filled to serve in one role of a future X.
///
/// Each row lists the four other cells of the X relative to the token, in the
/// order they are scored. Order matters: own-token bonuses double and opposing
/// penalties square as the scan progresses.
pub const ROLE_OFFSETS: [[(i32, i32); 4]; 5] = [
    // token as top-right arm
    [(-2, 0), (-1, -1), (-2, -2), (0, -2)],
    // token as top-left arm
    [(2, -2), (1, -1), (0, -2), (2, 0)],
    // token as bottom-right arm
    [(-2, 2), (-1, 1), (-2, 0), (0, 2)],
    // token as bottom-left arm
    [(0, 2), (1, 1), (2, 0), (2, 2)],
    // token as centre
    [(-1, 1), (1, 1), (-1, -1), (1, -1)],
];

/// Tunable weights for [`heuristic_score`](super::heuristic_score).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    /// Base value of each placed token
    pub token: i64,
    /// Per-token penalty while in the relocation phase, multiplied by token count
    pub relocation_phase_penalty: i64,
    /// Cost of each role cell that falls off the board
    pub out_of_bounds_penalty: i64,
    /// First bonus for an own or empty role cell; doubles after each own cell
    pub own_bonus_start: i64,
    /// First penalty for an opposing role cell; squares after each one
    pub opponent_penalty_start: i64,
    /// Multiplier on the horizontal win-strategy scan
    pub strategy_multiplier: i64,
    /// Two own cells two apart on a row
    pub strategy_pair: i64,
    /// Three own cells two apart on a row
    pub strategy_triple: i64,
    /// Triple with exactly one upper arm
    pub strategy_one_arm: i64,
    /// Triple with both upper arms
    pub strategy_both_arms: i64,
    /// Triple with both arms and the apex above
    pub strategy_apex: i64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            token: 1,
            relocation_phase_penalty: 20,
            out_of_bounds_penalty: 4,
            own_bonus_start: 20,
            opponent_penalty_start: 15,
            strategy_multiplier: 300,
            strategy_pair: 1_000,
            strategy_triple: 5_000,
            strategy_one_arm: 80_000,
            strategy_both_arms: 20_000,
            strategy_apex: 999_999,
        }
    }
}
