//! Legal action generation
//!
//! Placements are limited to cells diagonal to existing tokens. This narrows
//! what the search considers; the board still accepts any empty cell.

use super::{GameState, Side};
use crate::action::Action;
use crate::board::{Pos, DIAGONALS, KING_STEPS};

/// Default relocation-phase threshold: the automated side starts considering
/// relocations, and the heuristic starts its phase penalty, at or below this
/// many tokens left.
pub const RELOCATION_PHASE_TOKENS: u8 = 8;

impl GameState {
    /// Candidate actions for `side`, relocations first.
    ///
    /// `automated` widens relocations for the engine's own side: it may start
    /// moving tokens before its placement budget is gone.
    pub fn legal_actions(&self, side: Side, automated: bool) -> Vec<Action> {
        let player = self.player(side);

        if self.max_player().used_tokens().is_empty() && player.has_tokens() {
            if let Some(opening) = self.opening_action() {
                return vec![opening];
            }
        }

        let mut actions = Vec::new();
        let may_relocate = !player.has_tokens()
            || (automated && self.in_relocation_phase(player));
        if self.moves_left > 0 && may_relocate {
            actions.extend(self.relocation_actions(side));
        }
        if self.moves_left > 0 && player.has_tokens() {
            actions.extend(self.placement_actions());
        }
        actions
    }

    /// Forced first placement near the centre of the board.
    ///
    /// Returns `None` if both the centre cell and its fallback are taken.
    pub fn opening_action(&self) -> Option<Action> {
        let (w, h) = (self.board.width(), self.board.height());
        [Pos::new(w / 2, h / 2), Pos::new(w / 4, h / 2)]
            .into_iter()
            .find(|&pos| self.board.is_free(pos))
            .map(Action::Add)
    }

    /// Empty, non-lonely cells diagonal to any placed token, without duplicates.
    pub fn placement_actions(&self) -> Vec<Action> {
        let width = self.board.width();
        let mut seen = vec![false; (width * self.board.height()).max(0) as usize];
        let mut actions = Vec::new();

        for &token in self.all_tokens() {
            for (dx, dy) in DIAGONALS {
                let pos = token.offset(dx, dy);
                if !self.board.is_free(pos) || self.board.is_lonely(pos) {
                    continue;
                }
                let idx = ((pos.y - 1) * width + (pos.x - 1)) as usize;
                if !seen[idx] {
                    seen[idx] = true;
                    actions.push(Action::Add(pos));
                }
            }
        }
        actions
    }

    /// Every single-step relocation of `side`'s tokens into an empty cell.
    ///
    /// The most recently placed token's moves come first.
    pub fn relocation_actions(&self, side: Side) -> Vec<Action> {
        let mut actions = Vec::new();
        for &from in self.player(side).used_tokens().iter().rev() {
            for (dx, dy) in KING_STEPS {
                let to = from.offset(dx, dy);
                if self.board.is_free(to) {
                    actions.push(Action::Move { from, to });
                }
            }
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::fresh;
    use super::*;
    use crate::board::{Board, PlayerId};
    use crate::player::Player;

    #[test]
    fn test_opening_is_forced_to_centre() {
        let state = fresh();
        assert_eq!(
            state.legal_actions(Side::Max, true),
            vec![Action::Add(Pos::new(6, 5))]
        );
    }

    #[test]
    fn test_opening_falls_back_when_centre_taken() {
        let mut state = fresh();
        state.apply_mut(Action::Add(Pos::new(6, 5)), Side::Min).unwrap();
        assert_eq!(
            state.legal_actions(Side::Max, true),
            vec![Action::Add(Pos::new(3, 5))]
        );
    }

    #[test]
    fn test_placements_are_diagonal_and_unique() {
        let mut state = fresh();
        state.apply_mut(Action::Add(Pos::new(6, 5)), Side::Max).unwrap();
        state.apply_mut(Action::Add(Pos::new(7, 6)), Side::Min).unwrap();

        let actions = state.legal_actions(Side::Max, true);
        // (6,5) gives 4 diagonals minus the occupied (7,6); (7,6) adds 3 new ones
        // and repeats none besides (6,5) itself, which is occupied.
        assert_eq!(actions.len(), 6);
        for action in &actions {
            let Action::Add(pos) = *action else {
                panic!("unexpected relocation {action}");
            };
            assert!(state.board().is_free(pos));
        }
        let mut unique = actions.clone();
        unique.sort_by_key(|a| a.target());
        unique.dedup();
        assert_eq!(unique.len(), actions.len());
    }

    #[test]
    fn test_shared_diagonal_listed_once() {
        let mut state = fresh();
        state.apply_mut(Action::Add(Pos::new(4, 4)), Side::Max).unwrap();
        state.apply_mut(Action::Add(Pos::new(6, 4)), Side::Min).unwrap();
        let actions = state.placement_actions();
        let shared = actions
            .iter()
            .filter(|a| a.target() == Pos::new(5, 5))
            .count();
        assert_eq!(shared, 1);
    }

    #[test]
    fn test_relocations_only_when_out_of_tokens() {
        let mut state = GameState::new(
            Board::new(),
            10,
            [
                Player::new(PlayerId(1), 'X', 1),
                Player::new(PlayerId(2), 'O', 15),
            ],
        );
        state.apply_mut(Action::Add(Pos::new(6, 5)), Side::Max).unwrap();

        let actions = state.legal_actions(Side::Max, false);
        assert_eq!(actions.len(), 8);
        assert!(actions.iter().all(|a| a.is_move()));
    }

    #[test]
    fn test_automated_side_relocates_early() {
        let mut state = GameState::new(
            Board::new(),
            10,
            [
                Player::new(PlayerId(1), 'X', 9),
                Player::new(PlayerId(2), 'O', 15),
            ],
        );
        state.apply_mut(Action::Add(Pos::new(6, 5)), Side::Max).unwrap();

        let automated = state.legal_actions(Side::Max, true);
        assert_eq!(automated.len(), 8 + 4);
        assert!(automated[..8].iter().all(|a| a.is_move()));
        assert!(automated[8..].iter().all(|a| !a.is_move()));

        let human = state.legal_actions(Side::Max, false);
        assert_eq!(human.len(), 4);
    }

    #[test]
    fn test_relocation_order_latest_token_first() {
        let mut state = GameState::new(
            Board::new(),
            10,
            [
                Player::new(PlayerId(1), 'X', 2),
                Player::new(PlayerId(2), 'O', 15),
            ],
        );
        state.apply_mut(Action::Add(Pos::new(2, 2)), Side::Max).unwrap();
        state.apply_mut(Action::Add(Pos::new(9, 9)), Side::Max).unwrap();

        let actions = state.relocation_actions(Side::Max);
        assert_eq!(
            actions[0],
            Action::Move {
                from: Pos::new(9, 9),
                to: Pos::new(8, 9)
            }
        );
        assert_eq!(actions.len(), 16);
    }

    #[test]
    fn test_corner_relocations_stay_on_board() {
        let mut state = GameState::new(
            Board::new(),
            10,
            [
                Player::new(PlayerId(1), 'X', 1),
                Player::new(PlayerId(2), 'O', 15),
            ],
        );
        state.apply_mut(Action::Add(Pos::new(1, 1)), Side::Max).unwrap();
        assert_eq!(state.relocation_actions(Side::Max).len(), 3);
    }

    #[test]
    fn test_nothing_without_moves() {
        let mut state = GameState::new(
            Board::new(),
            0,
            [
                Player::new(PlayerId(1), 'X', 5),
                Player::new(PlayerId(2), 'O', 5),
            ],
        );
        state.apply_mut(Action::Add(Pos::new(6, 5)), Side::Max).unwrap();
        assert!(state.legal_actions(Side::Max, true).is_empty());
        assert!(!state.placement_actions().is_empty());
    }

    #[test]
    fn test_generated_actions_pass_validation() {
        let mut state = fresh();
        let script = [
            (Side::Max, Pos::new(6, 5)),
            (Side::Min, Pos::new(7, 6)),
            (Side::Max, Pos::new(5, 4)),
            (Side::Min, Pos::new(5, 6)),
        ];
        for (side, pos) in script {
            state.apply_mut(Action::Add(pos), side).unwrap();
        }
        for side in [Side::Max, Side::Min] {
            for action in state.legal_actions(side, side == Side::Max) {
                assert!(
                    state.apply(action, side).is_ok(),
                    "{action} rejected for {side:?}"
                );
            }
        }
    }
}
