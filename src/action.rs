//! Actions a player can take on their turn.

use serde::{Deserialize, Serialize};

use crate::board::Pos;

/// One turn's worth of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place a new token from the player's budget.
    Add(Pos),
    /// Relocate an owned token one king step. Consumes one shared move.
    Move { from: Pos, to: Pos },
}

impl Action {
    /// True for relocations
    #[inline]
    pub fn is_move(self) -> bool {
        matches!(self, Action::Move { .. })
    }

    /// Cell the action leaves a token on
    #[inline]
    pub fn target(self) -> Pos {
        match self {
            Action::Add(pos) => pos,
            Action::Move { to, .. } => to,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Add(pos) => write!(f, "add {pos}"),
            Action::Move { from, to } => write!(f, "move {from} -> {to}"),
        }
    }
}
