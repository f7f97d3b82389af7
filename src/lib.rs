//! X-Rudder game engine
//!
//! X-Rudder is a two-player placement game on a small grid:
//! - 12x10 board, columns A-L and rows 1-10
//! - Each player adds up to 15 tokens
//! - 30 token relocations shared by both players for the whole game
//! - A player wins with an X: a token and its four diagonal neighbours
//! - An X does not count while the opponent holds both cells beside its centre
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Grid, coordinates, and placement/relocation validation
//! - [`rules`]: Win detection and the strike-through exception
//! - [`state`]: Search-facing game state and legal action generation
//! - [`eval`]: Heuristic evaluation of non-terminal positions
//! - [`search`]: Depth-limited minimax with alpha-beta pruning
//! - [`engine`]: Move selection with adaptive depth
//! - [`game`]: Turn loop, controllers, notation, and rendering
//! - [`config`]: TOML configuration
//!
//! # Quick Start
//!
//! ```
//! use xrudder::{Action, Engine, Pos, Side, XRudderConfig};
//!
//! let config = XRudderConfig::default();
//! let mut state = config.new_state(['X', 'O']);
//! let mut engine = Engine::new();
//!
//! // The engine always plays for player index 0 of the state it sees
//! let action = engine.choose_action(&state, 2).unwrap();
//! state.apply_mut(action, Side::Max).unwrap();
//! assert_eq!(action, Action::Add(Pos::new(6, 5)));
//!
//! // To let it answer for player 2, hand it the swapped view
//! let reply = engine.choose_action(&state.swapped(), 2).unwrap();
//! state.apply_mut(reply, Side::Min).unwrap();
//! assert_eq!(state.board().token_count(), 2);
//! ```

pub mod action;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod player;
pub mod rules;
pub mod search;
pub mod state;

// Re-export commonly used types for convenience
pub use action::Action;
pub use board::{Board, PlayerId, Pos};
pub use config::{ConfigError, XRudderConfig};
pub use engine::{DepthPolicy, Engine, MoveResult, SearchType};
pub use error::{MoveError, SearchError};
pub use game::{Controller, Game, Outcome};
pub use player::Player;
pub use state::{GameState, Side, MAX_SCORE, MIN_SCORE};
