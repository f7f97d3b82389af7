//! Game-tree search
//!
//! Plain depth-limited minimax with alpha-beta pruning over immutable
//! [`GameState`](crate::GameState) snapshots. No transposition table and no
//! move ordering beyond the generator's own order, so results are fully
//! reproducible.

pub mod alphabeta;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
