//! Win condition checking for X-Rudder
//!
//! A player wins with an X: a token whose four diagonal neighbours are all
//! their own. The X does not count if it is struck through, i.e. both
//! horizontal neighbours of the centre hold opposing tokens.

use std::collections::BTreeSet;

use crate::board::{Board, PlayerId, Pos, DIAGONALS};

impl Board {
    /// True if `pos` is the centre of a complete, unblocked X
    pub fn wins_at(&self, pos: Pos) -> bool {
        let Some(owner) = self.owner(pos) else {
            return false;
        };
        if self.is_struck_through(pos, owner) {
            return false;
        }
        DIAGONALS
            .iter()
            .all(|&(dx, dy)| self.owner(pos.offset(dx, dy)) == Some(owner))
    }

    /// True if both horizontal flanks of `pos` belong to someone other than `owner`.
    ///
    /// Empty or off-board flanks never block.
    pub fn is_struck_through(&self, pos: Pos, owner: PlayerId) -> bool {
        let blocks = |p: Pos| matches!(self.owner(p), Some(other) if other != owner);
        blocks(pos.offset(-1, 0)) && blocks(pos.offset(1, 0))
    }

    /// Owners of every winning centre among `coords`
    pub fn winners_among<'a, I>(&self, coords: I) -> BTreeSet<PlayerId>
    where
        I: IntoIterator<Item = &'a Pos>,
    {
        coords
            .into_iter()
            .filter(|&&pos| self.wins_at(pos))
            .filter_map(|&pos| self.owner(pos))
            .collect()
    }
}
