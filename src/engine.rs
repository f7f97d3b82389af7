//! Move selection for the automated player
//!
//! The engine wraps the [`Searcher`] with the guards the raw search does not
//! carry: it refuses finished positions, falls back to plain placements when
//! the gated generator has nothing to offer, and tunes its own search depth
//! between turns from how long the previous decision took.
//!
//! The engine always plays for player index 0 of the state it is given.
//!
//! # Example
//!
//! ```
//! use xrudder::{Action, Board, Engine, GameState, Player, PlayerId, Pos};
//!
//! let state = GameState::new(
//!     Board::new(),
//!     30,
//!     [Player::new(PlayerId(1), 'X', 15), Player::new(PlayerId(2), 'O', 15)],
//! );
//! let mut engine = Engine::new();
//! let action = engine.choose_action(&state, 2).unwrap();
//! assert_eq!(action, Action::Add(Pos::new(6, 5)));
//! ```

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::action::Action;
use crate::error::SearchError;
use crate::eval::HeuristicWeights;
use crate::search::Searcher;
use crate::state::{GameState, Side};

/// How the engine found its action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Full alpha-beta search over the generated actions
    AlphaBeta,
    /// Generator was empty; best one-ply placement instead
    Fallback,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub action: Action,
    /// Evaluation of the chosen line for the engine's side
    pub score: i64,
    pub search_type: SearchType,
    /// Depth actually searched
    pub depth: u8,
    pub time_ms: u64,
    pub nodes: u64,
}

/// Adjusts search depth between turns.
///
/// After each decision the depth drops by one if the decision took at least
/// `latency_threshold_ms`, never below `min_depth`. Once the engine's side has
/// no tokens left to place the depth is pinned to `exhausted_depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthPolicy {
    pub initial_depth: u8,
    pub latency_threshold_ms: u64,
    pub min_depth: u8,
    pub exhausted_depth: u8,
}

impl Default for DepthPolicy {
    fn default() -> Self {
        Self {
            initial_depth: 3,
            latency_threshold_ms: 4_200,
            min_depth: 2,
            exhausted_depth: 2,
        }
    }
}

impl DepthPolicy {
    /// Depth for the next decision given the last one's cost.
    #[must_use]
    pub fn next_depth(&self, current: u8, elapsed: Duration, tokens_left: u8) -> u8 {
        let mut depth = current;
        if elapsed >= Duration::from_millis(self.latency_threshold_ms) {
            depth = if depth > self.min_depth {
                depth - 1
            } else {
                self.min_depth
            };
        }
        if tokens_left == 0 {
            depth = self.exhausted_depth;
        }
        depth
    }
}

/// Automated X-Rudder player.
#[derive(Debug, Clone)]
pub struct Engine {
    searcher: Searcher,
    policy: DepthPolicy,
    depth: u8,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine with default weights and depth policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HeuristicWeights::default(), DepthPolicy::default())
    }

    #[must_use]
    pub fn with_config(weights: HeuristicWeights, policy: DepthPolicy) -> Self {
        Self {
            searcher: Searcher::new(weights),
            policy,
            depth: policy.initial_depth.max(1),
        }
    }

    /// Depth the next [`Engine::play_turn`] will search to
    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    #[inline]
    pub fn policy(&self) -> &DepthPolicy {
        &self.policy
    }

    /// Best action for player index 0 at a fixed depth.
    pub fn choose_action(&mut self, state: &GameState, depth: u8) -> Result<Action, SearchError> {
        Ok(self.choose_action_with_stats(state, depth)?.action)
    }

    /// Like [`Engine::choose_action`], with search statistics.
    ///
    /// A depth of 0 is treated as 1 so a decision always looks at least one
    /// ply ahead.
    #[instrument(skip(self, state), fields(tokens_left = state.max_player().tokens_left()))]
    pub fn choose_action_with_stats(
        &mut self,
        state: &GameState,
        depth: u8,
    ) -> Result<MoveResult, SearchError> {
        let start = Instant::now();

        if state.terminal_score().is_some() {
            return Err(SearchError::GameOver);
        }

        let depth = depth.max(1);
        if state.legal_actions(Side::Max, true).is_empty() {
            return self.fallback(state, start);
        }

        let result = self.searcher.search(state, depth)?;
        let action = result.best_action.ok_or(SearchError::NoLegalActions)?;
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            %action,
            score = result.score,
            nodes = result.nodes,
            cutoffs = result.stats.cutoffs,
            time_ms,
            "search finished"
        );

        Ok(MoveResult {
            action,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            depth,
            time_ms,
            nodes: result.nodes,
        })
    }

    /// Decide at the engine's current depth, then let the depth policy react
    /// to how long that took.
    pub fn play_turn(&mut self, state: &GameState) -> Result<MoveResult, SearchError> {
        let start = Instant::now();
        let result = self.choose_action_with_stats(state, self.depth)?;

        let tokens_left = state
            .apply(result.action, Side::Max)
            .map(|next| next.max_player().tokens_left())
            .unwrap_or_else(|_| state.max_player().tokens_left());
        let next = self.policy.next_depth(self.depth, start.elapsed(), tokens_left);
        if next != self.depth {
            debug!(from = self.depth, to = next, "search depth adjusted");
            self.depth = next;
        }
        Ok(result)
    }

    /// One-ply pick among ungated placements, used when the generator is
    /// empty but the side still holds tokens (for instance after the shared
    /// move budget runs out).
    fn fallback(&self, state: &GameState, start: Instant) -> Result<MoveResult, SearchError> {
        if !state.max_player().has_tokens() {
            return Err(SearchError::NoLegalActions);
        }

        let weights = self.searcher.weights();
        let mut best: Option<(Action, i64)> = None;
        for action in state.placement_actions() {
            let child = state
                .apply(action, Side::Max)
                .map_err(|source| SearchError::IllegalGeneratedAction { action, source })?;
            let score = child
                .terminal_score()
                .unwrap_or_else(|| child.heuristic_score(weights));
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((action, score));
            }
        }

        let (action, score) = best.ok_or(SearchError::NoLegalActions)?;
        debug!(%action, score, "fallback placement");

        Ok(MoveResult {
            action,
            score,
            search_type: SearchType::Fallback,
            depth: 1,
            time_ms: start.elapsed().as_millis() as u64,
            nodes: 1,
        })
    }
}
