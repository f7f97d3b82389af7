//! Depth-limited minimax with alpha-beta pruning
//!
//! Every frame owns its own [`GameState`]: children are built with
//! [`GameState::apply`], which deep-copies, so siblings never observe each
//! other's moves. The max side is always player index 0; frames alternate
//! between maximising and minimising.
//!
//! # Example
//!
//! ```
//! use xrudder::eval::HeuristicWeights;
//! use xrudder::search::Searcher;
//! use xrudder::{Board, GameState, Player, PlayerId};
//!
//! let state = GameState::new(
//!     Board::new(),
//!     30,
//!     [Player::new(PlayerId(1), 'X', 15), Player::new(PlayerId(2), 'O', 15)],
//! );
//! let mut searcher = Searcher::new(HeuristicWeights::default());
//! let result = searcher.search(&state, 2).unwrap();
//! assert!(result.best_action.is_some());
//! ```

use crate::action::Action;
use crate::error::SearchError;
use crate::eval::HeuristicWeights;
use crate::state::{GameState, Side, MAX_SCORE, MIN_SCORE};

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frames cut off because alpha met beta
    pub cutoffs: u64,
    /// Frames scored by a win or draw verdict
    pub terminal_leaves: u64,
    /// Frames scored by the heuristic
    pub heuristic_leaves: u64,
    /// Frames with no legal action, left at their role's worst score
    pub stuck_leaves: u64,
}

/// Search result containing the best action found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best root action, `None` if the root was a leaf
    pub best_action: Option<Action>,
    /// Minimax value of the root for the max side
    pub score: i64,
    /// Depth the search was run to
    pub depth: u8,
    /// Total frames visited
    pub nodes: u64,
    pub stats: SearchStats,
}

/// Alpha-beta searcher. Holds only the evaluation weights and counters, so one
/// instance can be reused across turns.
#[derive(Debug, Clone)]
pub struct Searcher {
    weights: HeuristicWeights,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(weights: HeuristicWeights) -> Self {
        Self {
            weights,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }

    /// Search `depth` plies from `state` for the max side.
    ///
    /// Deterministic: the same state and depth always give the same action.
    pub fn search(&mut self, state: &GameState, depth: u8) -> Result<SearchResult, SearchError> {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let (score, best_action) = self.alpha_beta(state, true, depth, MIN_SCORE, MAX_SCORE)?;

        Ok(SearchResult {
            best_action,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        })
    }

    /// Score one frame and report the child action that produced it.
    fn alpha_beta(
        &mut self,
        state: &GameState,
        maximizing: bool,
        depth: u8,
        mut alpha: i64,
        mut beta: i64,
    ) -> Result<(i64, Option<Action>), SearchError> {
        self.nodes += 1;

        // Verdicts outrank the depth limit
        if let Some(score) = state.terminal_score() {
            self.stats.terminal_leaves += 1;
            return Ok((score, None));
        }
        if depth == 0 {
            self.stats.heuristic_leaves += 1;
            return Ok((state.heuristic_score(&self.weights), None));
        }

        let side = if maximizing { Side::Max } else { Side::Min };
        let actions = state.legal_actions(side, maximizing);
        let mut best_score = if maximizing { MIN_SCORE } else { MAX_SCORE };
        let mut best_action = None;
        if actions.is_empty() {
            // Stuck but not finished: the frame keeps its worst-case score
            self.stats.stuck_leaves += 1;
            return Ok((best_score, best_action));
        }

        for action in actions {
            let child = state
                .apply(action, side)
                .map_err(|source| SearchError::IllegalGeneratedAction { action, source })?;
            let (score, _) = self.alpha_beta(&child, !maximizing, depth - 1, alpha, beta)?;

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if best_action.is_none() || improves {
                best_score = score;
                best_action = Some(action);
            }

            if maximizing {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok((best_score, best_action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, PlayerId, Pos, DIAGONALS};
    use crate::player::Player;

    fn state_with(max: &[Pos], min: &[Pos], moves: u32) -> GameState {
        let mut state = GameState::new(
            Board::new(),
            moves,
            [
                Player::new(PlayerId(1), 'X', 15),
                Player::new(PlayerId(2), 'O', 15),
            ],
        );
        for &pos in max {
            state.apply_mut(Action::Add(pos), Side::Max).unwrap();
        }
        for &pos in min {
            state.apply_mut(Action::Add(pos), Side::Min).unwrap();
        }
        state
    }

    #[test]
    fn test_depth_zero_is_heuristic() {
        let state = state_with(&[Pos::new(6, 5)], &[Pos::new(7, 6)], 30);
        let mut searcher = Searcher::new(HeuristicWeights::default());
        let result = searcher.search(&state, 0).unwrap();

        assert_eq!(result.score, state.heuristic_score(&HeuristicWeights::default()));
        assert_eq!(result.best_action, None);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_terminal_root_returns_verdict() {
        let centre = Pos::new(5, 5);
        let mut arms: Vec<Pos> = DIAGONALS.iter().map(|&(dx, dy)| centre.offset(dx, dy)).collect();
        arms.push(centre);
        let state = state_with(&arms, &[], 30);

        let mut searcher = Searcher::new(HeuristicWeights::default());
        let result = searcher.search(&state, 3).unwrap();
        assert_eq!(result.score, MAX_SCORE);
        assert_eq!(result.best_action, None);
        assert_eq!(result.stats.terminal_leaves, 1);
    }

    #[test]
    fn test_opening_search_plays_centre() {
        let state = state_with(&[], &[], 30);
        let mut searcher = Searcher::new(HeuristicWeights::default());
        let result = searcher.search(&state, 2).unwrap();
        assert_eq!(result.best_action, Some(Action::Add(Pos::new(6, 5))));
    }

    #[test]
    fn test_completes_own_x() {
        // Centre and three arms placed; the fourth arm wins on the spot.
        let state = state_with(
            &[Pos::new(5, 5), Pos::new(4, 4), Pos::new(6, 4), Pos::new(4, 6)],
            &[Pos::new(9, 2)],
            30,
        );
        let mut searcher = Searcher::new(HeuristicWeights::default());
        let result = searcher.search(&state, 2).unwrap();

        assert_eq!(result.best_action, Some(Action::Add(Pos::new(6, 6))));
        assert_eq!(result.score, MAX_SCORE);
    }

    #[test]
    fn test_blocks_opponent_x() {
        // Opponent needs (6,6) to finish; any other move loses next ply.
        let state = state_with(
            &[Pos::new(9, 2)],
            &[Pos::new(5, 5), Pos::new(4, 4), Pos::new(6, 4), Pos::new(4, 6)],
            30,
        );
        let mut searcher = Searcher::new(HeuristicWeights::default());
        let result = searcher.search(&state, 2).unwrap();

        assert_eq!(result.best_action, Some(Action::Add(Pos::new(6, 6))));
        assert!(result.score > MIN_SCORE);
    }

    #[test]
    fn test_search_is_deterministic() {
        let state = state_with(&[Pos::new(6, 5), Pos::new(5, 4)], &[Pos::new(7, 6)], 30);
        let mut a = Searcher::new(HeuristicWeights::default());
        let mut b = Searcher::new(HeuristicWeights::default());
        let ra = a.search(&state, 2).unwrap();
        let rb = b.search(&state, 2).unwrap();
        assert_eq!(ra.best_action, rb.best_action);
        assert_eq!(ra.score, rb.score);
        assert_eq!(ra.nodes, rb.nodes);
    }

    fn out_of_moves(tokens: u8) -> GameState {
        let mut state = GameState::new(
            Board::new(),
            0,
            [
                Player::new(PlayerId(1), 'X', tokens),
                Player::new(PlayerId(2), 'O', tokens),
            ],
        );
        state.apply_mut(Action::Add(Pos::new(6, 5)), Side::Max).unwrap();
        state.apply_mut(Action::Add(Pos::new(7, 6)), Side::Min).unwrap();
        state
    }

    #[test]
    fn test_stuck_max_frame_keeps_min_score() {
        // No moves left: neither placements nor relocations are generated.
        let state = out_of_moves(5);
        assert!(state.legal_actions(Side::Max, true).is_empty());
        assert_eq!(state.terminal_score(), None);

        let mut searcher = Searcher::new(HeuristicWeights::default());
        let result = searcher.search(&state, 2).unwrap();
        assert_eq!(result.score, MIN_SCORE);
        assert_eq!(result.best_action, None);
        assert_eq!(result.stats.stuck_leaves, 1);
        assert_eq!(result.stats.heuristic_leaves, 0);
    }

    #[test]
    fn test_stuck_min_frame_keeps_max_score() {
        let state = out_of_moves(5).swapped();
        let mut searcher = Searcher::new(HeuristicWeights::default());
        let (score, action) = searcher
            .alpha_beta(&state, false, 2, MIN_SCORE, MAX_SCORE)
            .unwrap();
        assert_eq!(score, MAX_SCORE);
        assert_eq!(action, None);
    }

    #[test]
    fn test_search_does_not_touch_input() {
        let state = state_with(&[Pos::new(6, 5)], &[Pos::new(7, 6)], 30);
        let before = state.clone();
        let mut searcher = Searcher::new(HeuristicWeights::default());
        let _ = searcher.search(&state, 2).unwrap();
        assert_eq!(state, before);
    }
}
