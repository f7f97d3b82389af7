//! Error types for board rules and search.
//!
//! Rule violations ([`MoveError`]) are recoverable: the game loop maps them to
//! a message and asks a human for another action. Search failures
//! ([`SearchError`]) mean the engine was asked something it cannot answer, or
//! that its move generator disagreed with the board's validation.

use derive_more::{Display, Error};

use crate::action::Action;
use crate::board::{PlayerId, Pos};

/// A rejected placement or relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinate lies outside the board.
    #[display("coordinate {pos} is beyond the bounds of the board")]
    OutOfBounds { pos: Pos },

    /// Target cell already holds a token.
    #[display("coordinate {pos} is already occupied by player {by}")]
    AlreadyOccupied { pos: Pos, by: PlayerId },

    /// Origin of a relocation is empty or belongs to someone else.
    #[display("player {player} has no token at {pos} to move")]
    NotOwner {
        pos: Pos,
        player: PlayerId,
        actual: Option<PlayerId>,
    },

    /// Relocation is not a single step in one of the eight directions.
    #[display("a token moves exactly one step in any of eight directions, not {from} to {to}")]
    InvalidMove { from: Pos, to: Pos },

    /// Player has no tokens left to add.
    #[display("player {player} has no tokens left to add")]
    OutOfTokens { player: PlayerId },

    /// The shared relocation budget is exhausted.
    #[display("all token moves have been used up")]
    OutOfMoves,

    /// Player can neither add nor move; their turn is skipped.
    #[display("player {player} has no tokens to add and no moves available")]
    OutOfMovesAndTokens { player: PlayerId },
}

/// Failure to pick an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// The root state already has a verdict.
    #[display("game is already over")]
    GameOver,

    /// The side to move has nothing it can do.
    #[display("no legal actions available")]
    NoLegalActions,

    /// The generator produced an action the board rejected.
    #[display("generated action {action} was rejected: {source}")]
    IllegalGeneratedAction { action: Action, source: MoveError },
}
