//! Position evaluation for the depth cutoff of the search

pub mod heuristic;
pub mod patterns;

pub use heuristic::{heuristic_score, potential_wins, win_strategy};
pub use patterns::{HeuristicWeights, ROLE_OFFSETS};
