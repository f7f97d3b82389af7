//! Search-facing game state
//!
//! A [`GameState`] is a self-contained snapshot: board, both inventories, and
//! the shared relocation budget. Player index 0 is always the side the search
//! maximises for; the orchestrator reorders players before handing a state to
//! the engine. Transitions never mutate in place from the search's point of
//! view: [`GameState::apply`] returns a fresh deep copy.

mod actions;

use std::collections::BTreeSet;

use crate::action::Action;
use crate::board::{Board, PlayerId, Pos};
use crate::error::MoveError;
use crate::eval::{self, HeuristicWeights};
use crate::player::Player;

pub use actions::RELOCATION_PHASE_TOKENS;

/// Score of a position the max side has won
pub const MAX_SCORE: i64 = 99_999_999_999_999;
/// Score of a position the max side has lost
pub const MIN_SCORE: i64 = -MAX_SCORE;

/// Default shared relocation budget for a whole game
pub const DEFAULT_MOVES: u32 = 30;

/// Which of the two players a search frame acts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Player index 0, whose score is maximised
    Max,
    /// Player index 1, whose score is minimised
    Min,
}

impl Side {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Max => 0,
            Side::Min => 1,
        }
    }

    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    moves_left: u32,
    players: [Player; 2],
    relocation_phase_tokens: u8,
}

impl GameState {
    /// `players[0]` becomes the max side.
    pub fn new(board: Board, moves_left: u32, players: [Player; 2]) -> Self {
        Self {
            board,
            moves_left,
            players,
            relocation_phase_tokens: RELOCATION_PHASE_TOKENS,
        }
    }

    /// Sets the token count at or below which a player is in the relocation
    /// phase. Move generation and the heuristic both read it from here.
    #[must_use]
    pub fn with_relocation_phase_tokens(mut self, tokens: u8) -> Self {
        self.relocation_phase_tokens = tokens;
        self
    }

    #[inline]
    pub fn relocation_phase_tokens(&self) -> u8 {
        self.relocation_phase_tokens
    }

    /// Whether `player` has few enough tokens left to start relocating
    #[inline]
    pub fn in_relocation_phase(&self, player: &Player) -> bool {
        player.tokens_left() <= self.relocation_phase_tokens
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    #[inline]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    #[inline]
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    #[inline]
    pub fn max_player(&self) -> &Player {
        &self.players[0]
    }

    #[inline]
    pub fn min_player(&self) -> &Player {
        &self.players[1]
    }

    /// Side that owns player `id`, if either does
    pub fn side_of(&self, id: PlayerId) -> Option<Side> {
        [Side::Max, Side::Min]
            .into_iter()
            .find(|&side| self.player(side).id() == id)
    }

    /// Same position with the two players' roles exchanged
    #[must_use]
    pub fn swapped(&self) -> GameState {
        let [a, b] = self.players.clone();
        GameState::new(self.board.clone(), self.moves_left, [b, a])
            .with_relocation_phase_tokens(self.relocation_phase_tokens)
    }

    /// Successor state after `side` plays `action`. `self` is left untouched.
    pub fn apply(&self, action: Action, side: Side) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_mut(action, side)?;
        Ok(next)
    }

    /// Play `action` for `side` on this state.
    ///
    /// Relocations spend one move from the shared budget; placements are free.
    pub fn apply_mut(&mut self, action: Action, side: Side) -> Result<(), MoveError> {
        let player = &mut self.players[side.index()];
        match action {
            Action::Add(pos) => self.board.place(player, pos),
            Action::Move { from, to } => {
                if self.moves_left == 0 {
                    return Err(MoveError::OutOfMoves);
                }
                self.board.relocate(player, from, to)?;
                self.moves_left -= 1;
                Ok(())
            }
        }
    }

    /// Every placed token, max side's first
    pub fn all_tokens(&self) -> impl Iterator<Item = &Pos> {
        self.players[0]
            .used_tokens()
            .iter()
            .chain(self.players[1].used_tokens())
    }

    /// Owners of every complete, unblocked X on the board
    pub fn winners(&self) -> BTreeSet<PlayerId> {
        self.board.winners_among(self.all_tokens())
    }

    /// Neither player can add a token and no moves remain
    pub fn is_exhausted(&self) -> bool {
        self.moves_left == 0 && self.players.iter().all(|p| !p.has_tokens())
    }

    /// Verdict if the game is over, from the max side's perspective.
    ///
    /// When both players hold an X at once the max side's win takes
    /// precedence: the sentinel depends on whose perspective the state is
    /// scored from, not on scan order.
    pub fn terminal_score(&self) -> Option<i64> {
        let winners = self.winners();
        if winners.contains(&self.max_player().id()) {
            Some(MAX_SCORE)
        } else if !winners.is_empty() {
            Some(MIN_SCORE)
        } else if self.is_exhausted() {
            Some(0)
        } else {
            None
        }
    }

    /// Static evaluation for the max side
    #[must_use]
    pub fn heuristic_score(&self, weights: &HeuristicWeights) -> i64 {
        eval::heuristic_score(self, weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::DIAGONALS;

    pub(crate) fn fresh() -> GameState {
        GameState::new(
            Board::new(),
            DEFAULT_MOVES,
            [
                Player::new(PlayerId(1), 'X', 15),
                Player::new(PlayerId(2), 'O', 15),
            ],
        )
    }

    fn with_x(centre: Pos, side: Side) -> GameState {
        let mut state = fresh();
        state.apply_mut(Action::Add(centre), side).unwrap();
        for (dx, dy) in DIAGONALS {
            state.apply_mut(Action::Add(centre.offset(dx, dy)), side).unwrap();
        }
        state
    }

    #[test]
    fn test_fresh_state_has_no_verdict() {
        assert_eq!(fresh().terminal_score(), None);
    }

    #[test]
    fn test_max_side_win() {
        let state = with_x(Pos::new(5, 5), Side::Max);
        assert_eq!(state.terminal_score(), Some(MAX_SCORE));
    }

    #[test]
    fn test_min_side_win() {
        let state = with_x(Pos::new(5, 5), Side::Min);
        assert_eq!(state.terminal_score(), Some(MIN_SCORE));
        assert_eq!(state.swapped().terminal_score(), Some(MAX_SCORE));
    }

    #[test]
    fn test_struck_through_x_has_no_verdict() {
        let mut state = with_x(Pos::new(5, 5), Side::Max);
        state.apply_mut(Action::Add(Pos::new(4, 5)), Side::Min).unwrap();
        state.apply_mut(Action::Add(Pos::new(6, 5)), Side::Min).unwrap();
        assert_eq!(state.terminal_score(), None);
    }

    #[test]
    fn test_simultaneous_wins_favour_max_side() {
        let mut state = with_x(Pos::new(3, 3), Side::Max);
        let centre = Pos::new(9, 7);
        state.apply_mut(Action::Add(centre), Side::Min).unwrap();
        for (dx, dy) in DIAGONALS {
            state.apply_mut(Action::Add(centre.offset(dx, dy)), Side::Min).unwrap();
        }
        assert_eq!(state.terminal_score(), Some(MAX_SCORE));
        assert_eq!(state.swapped().terminal_score(), Some(MAX_SCORE));
    }

    #[test]
    fn test_exhausted_is_draw() {
        let state = GameState::new(
            Board::new(),
            0,
            [
                Player::new(PlayerId(1), 'X', 0),
                Player::new(PlayerId(2), 'O', 0),
            ],
        );
        assert_eq!(state.terminal_score(), Some(0));
    }

    #[test]
    fn test_no_moves_but_tokens_is_not_draw() {
        let state = GameState::new(
            Board::new(),
            0,
            [
                Player::new(PlayerId(1), 'X', 1),
                Player::new(PlayerId(2), 'O', 0),
            ],
        );
        assert_eq!(state.terminal_score(), None);
    }

    #[test]
    fn test_move_spends_budget_add_does_not() {
        let state = fresh();
        let a = state.apply(Action::Add(Pos::new(5, 5)), Side::Max).unwrap();
        assert_eq!(a.moves_left(), DEFAULT_MOVES);

        let b = a
            .apply(
                Action::Move {
                    from: Pos::new(5, 5),
                    to: Pos::new(5, 6),
                },
                Side::Max,
            )
            .unwrap();
        assert_eq!(b.moves_left(), DEFAULT_MOVES - 1);
        assert_eq!(b.max_player().used_tokens(), &[Pos::new(5, 6)]);
    }

    #[test]
    fn test_move_without_budget_rejected() {
        let mut state = fresh();
        state.apply_mut(Action::Add(Pos::new(5, 5)), Side::Max).unwrap();
        let state = GameState::new(state.board().clone(), 0, state.players().clone());
        let err = state
            .apply(
                Action::Move {
                    from: Pos::new(5, 5),
                    to: Pos::new(5, 6),
                },
                Side::Max,
            )
            .unwrap_err();
        assert_eq!(err, MoveError::OutOfMoves);
    }

    #[test]
    fn test_apply_leaves_parent_untouched() {
        let parent = fresh();
        let child = parent.apply(Action::Add(Pos::new(6, 5)), Side::Max).unwrap();
        let mut grandchild = child.clone();
        grandchild
            .apply_mut(Action::Add(Pos::new(7, 6)), Side::Min)
            .unwrap();

        assert_eq!(parent.board().token_count(), 0);
        assert_eq!(parent.max_player().tokens_left(), 15);
        assert_eq!(child.board().token_count(), 1);
        assert_eq!(child.min_player().tokens_left(), 15);
        assert!(child.min_player().used_tokens().is_empty());
    }

    #[test]
    fn test_side_of() {
        let state = fresh();
        assert_eq!(state.side_of(PlayerId(1)), Some(Side::Max));
        assert_eq!(state.swapped().side_of(PlayerId(1)), Some(Side::Min));
        assert_eq!(state.side_of(PlayerId(7)), None);
    }
}
