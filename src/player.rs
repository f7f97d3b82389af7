//! Per-player token inventory.

use serde::{Deserialize, Serialize};

use crate::board::{PlayerId, Pos};

/// Default number of tokens each player may add
pub const DEFAULT_TOKENS: u8 = 15;

/// A player's glyph, remaining budget, and placed tokens.
///
/// Only [`Board`](crate::board::Board) mutates the inventory, so the token
/// list always mirrors the cells this player owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    glyph: char,
    tokens_left: u8,
    used_tokens: Vec<Pos>,
}

impl Player {
    pub fn new(id: PlayerId, glyph: char, tokens: u8) -> Self {
        Self {
            id,
            glyph,
            tokens_left: tokens,
            used_tokens: Vec::with_capacity(usize::from(tokens)),
        }
    }

    #[inline]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[inline]
    pub fn glyph(&self) -> char {
        self.glyph
    }

    #[inline]
    pub fn tokens_left(&self) -> u8 {
        self.tokens_left
    }

    #[inline]
    pub fn has_tokens(&self) -> bool {
        self.tokens_left > 0
    }

    /// Tokens on the board, in the order they arrived at their cells
    #[inline]
    pub fn used_tokens(&self) -> &[Pos] {
        &self.used_tokens
    }

    pub(crate) fn use_token(&mut self, pos: Pos) {
        debug_assert!(self.tokens_left > 0);
        self.tokens_left -= 1;
        self.used_tokens.push(pos);
    }

    pub(crate) fn update_moved_token(&mut self, from: Pos, to: Pos) {
        if let Some(idx) = self.used_tokens.iter().position(|&p| p == from) {
            self.used_tokens.remove(idx);
        }
        self.used_tokens.push(to);
    }
}
