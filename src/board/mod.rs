//! Board representation for X-Rudder

pub mod board;


// Re-exports
pub use board::Board;

use serde::{Deserialize, Serialize};

/// Default board width (columns A-L)
pub const DEFAULT_WIDTH: i32 = 12;
/// Default board height (rows 1-10)
pub const DEFAULT_HEIGHT: i32 = 10;

/// Owner id of a token. Ids start at 1; 0 is never a player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_more::Display,
)]
#[display("{_0}")]
pub struct PlayerId(pub u8);

/// Position on the board, 1-indexed in both axes.
///
/// Positions are plain integer pairs so that offsets can step outside the
/// board; use [`Board::in_bounds`] before treating one as a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// True if `other` is exactly one king step away (never the same cell)
    #[inline]
    pub fn is_king_step(self, other: Pos) -> bool {
        self != other && (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}

/// The four diagonal neighbours that form the arms of an X.
pub const DIAGONALS: [(i32, i32); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

/// The eight king steps, in scan order W, E, S, N, NW, NE, SW, SE.
pub const KING_STEPS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, 1),
    (1, 1),
    (-1, -1),
    (1, -1),
];
