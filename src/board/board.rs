//! Board structure with ownership tracking

use super::{PlayerId, Pos, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::MoveError;
use crate::player::Player;

/// Game board: a `width × height` grid of cells, each empty or owned.
///
/// Coordinates are 1-indexed. Every mutation goes through [`Board::place`] or
/// [`Board::relocate`], which keep the owning [`Player`]'s inventory in step
/// with the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    /// Cells in row-major order starting at (1, 1)
    cells: Vec<Option<PlayerId>>,
}

impl Board {
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    pub fn with_size(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            cells: vec![None; (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 1 && pos.x <= self.width && pos.y >= 1 && pos.y <= self.height
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        ((pos.y - 1) * self.width + (pos.x - 1)) as usize
    }

    /// Owner of the cell, `None` if empty or off the board
    #[inline]
    pub fn owner(&self, pos: Pos) -> Option<PlayerId> {
        if self.in_bounds(pos) {
            self.cells[self.index(pos)]
        } else {
            None
        }
    }

    #[inline]
    pub fn occupied(&self, pos: Pos) -> bool {
        self.owner(pos).is_some()
    }

    /// True if `pos` is on the board and empty
    #[inline]
    pub fn is_free(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && !self.occupied(pos)
    }

    /// Add one of `player`'s tokens at `pos`
    pub fn place(&mut self, player: &mut Player, pos: Pos) -> Result<(), MoveError> {
        if !self.in_bounds(pos) {
            return Err(MoveError::OutOfBounds { pos });
        }
        if let Some(by) = self.owner(pos) {
            return Err(MoveError::AlreadyOccupied { pos, by });
        }
        if !player.has_tokens() {
            return Err(MoveError::OutOfTokens { player: player.id() });
        }

        let idx = self.index(pos);
        self.cells[idx] = Some(player.id());
        player.use_token(pos);
        Ok(())
    }

    /// Move one of `player`'s tokens a single king step
    pub fn relocate(&mut self, player: &mut Player, from: Pos, to: Pos) -> Result<(), MoveError> {
        if !self.in_bounds(from) {
            return Err(MoveError::OutOfBounds { pos: from });
        }
        if !self.in_bounds(to) {
            return Err(MoveError::OutOfBounds { pos: to });
        }
        let actual = self.owner(from);
        if actual != Some(player.id()) {
            return Err(MoveError::NotOwner {
                pos: from,
                player: player.id(),
                actual,
            });
        }
        if let Some(by) = self.owner(to) {
            return Err(MoveError::AlreadyOccupied { pos: to, by });
        }
        if !from.is_king_step(to) {
            return Err(MoveError::InvalidMove { from, to });
        }

        let from_idx = self.index(from);
        let to_idx = self.index(to);
        self.cells[from_idx] = None;
        self.cells[to_idx] = Some(player.id());
        player.update_moved_token(from, to);
        Ok(())
    }

    /// True if nothing occupies the 3×3 block centred on `pos`
    pub fn is_lonely(&self, pos: Pos) -> bool {
        for dy in -1..=1 {
            for dx in -1..=1 {
                if self.occupied(pos.offset(dx, dy)) {
                    return false;
                }
            }
        }
        true
    }

    /// Number of occupied cells
    #[inline]
    pub fn token_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// True if no cell is empty
    #[inline]
    pub fn full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterate over every position on the board, row by row from (1, 1)
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (1..=self.height).flat_map(move |y| (1..=self.width).map(move |x| Pos::new(x, y)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
