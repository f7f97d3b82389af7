//! Game and engine configuration.
//!
//! Everything has a default matching the standard game, so an empty TOML file
//! (or none at all) gives a 12x10 board with 15 tokens each and 30 shared
//! moves. A file only needs the keys it changes:
//!
//! ```toml
//! [rules]
//! tokens_per_player = 10
//! relocation_phase_tokens = 6
//!
//! [engine]
//! initial_depth = 2
//!
//! [heuristic]
//! strategy_multiplier = 150
//! ```

use std::path::Path;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::{Board, PlayerId, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::engine::{DepthPolicy, Engine};
use crate::eval::HeuristicWeights;
use crate::player::{Player, DEFAULT_TOKENS};
use crate::state::{GameState, DEFAULT_MOVES, RELOCATION_PHASE_TOKENS};

/// Columns are labelled with single letters.
pub const MAX_WIDTH: i32 = 26;
/// Rows are labelled with at most two digits.
pub const MAX_HEIGHT: i32 = 99;
/// An X needs three rows and three columns.
pub const MIN_SIDE: i32 = 3;

/// Board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Token and move budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Tokens each player may add
    pub tokens_per_player: u8,
    /// Relocations shared by both players for the whole game
    pub moves: u32,
    /// At or below this many tokens left the engine also relocates and the
    /// heuristic applies its phase penalty
    pub relocation_phase_tokens: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            tokens_per_player: DEFAULT_TOKENS,
            moves: DEFAULT_MOVES,
            relocation_phase_tokens: RELOCATION_PHASE_TOKENS,
        }
    }
}

/// Full configuration, as loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XRudderConfig {
    pub board: BoardConfig,
    pub rules: RulesConfig,
    pub engine: DepthPolicy,
    pub heuristic: HeuristicWeights,
}

impl XRudderConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            width = config.board.width,
            height = config.board.height,
            tokens = config.rules.tokens_per_player,
            moves = config.rules.moves,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the board, notation, or search cannot handle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let BoardConfig { width, height } = self.board;
        if !(MIN_SIDE..=MAX_WIDTH).contains(&width) {
            return Err(ConfigError::new(format!(
                "board width must be between {} and {}, got {}",
                MIN_SIDE, MAX_WIDTH, width
            )));
        }
        if !(MIN_SIDE..=MAX_HEIGHT).contains(&height) {
            return Err(ConfigError::new(format!(
                "board height must be between {} and {}, got {}",
                MIN_SIDE, MAX_HEIGHT, height
            )));
        }
        if self.rules.tokens_per_player == 0 {
            return Err(ConfigError::new(
                "tokens_per_player must be at least 1".to_string(),
            ));
        }
        if self.engine.initial_depth == 0 || self.engine.min_depth == 0 {
            return Err(ConfigError::new(
                "search depths must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Fresh game state with player 1 to move first as index 0.
    #[must_use]
    pub fn new_state(&self, glyphs: [char; 2]) -> GameState {
        let tokens = self.rules.tokens_per_player;
        GameState::new(
            Board::with_size(self.board.width, self.board.height),
            self.rules.moves,
            [
                Player::new(PlayerId(1), glyphs[0], tokens),
                Player::new(PlayerId(2), glyphs[1], tokens),
            ],
        )
        .with_relocation_phase_tokens(self.rules.relocation_phase_tokens)
    }

    /// Engine using this configuration's weights and depth policy.
    #[must_use]
    pub fn engine(&self) -> Engine {
        Engine::with_config(self.heuristic, self.engine)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
