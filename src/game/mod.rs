//! Turn-by-turn game orchestration
//!
//! The [`Game`] owns the canonical [`GameState`] with player 1 at index 0 and
//! player 2 at index 1. Each turn it hands the seat's [`Controller`] a view
//! with that seat's player moved to index 0, applies the answer to the
//! canonical state, and checks for a verdict.

mod controller;
pub mod notation;
mod render;

pub use controller::{ConsoleController, Controller, ScriptedController, SearchController};
pub use notation::{format_action, format_pos, parse_action, parse_pos, NotationError};
pub use render::BoardView;

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, instrument, warn};

use crate::board::PlayerId;
use crate::error::MoveError;
use crate::state::{GameState, Side};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(PlayerId),
    Draw,
    /// The configured turn limit ran out first
    TurnLimit,
}

/// Two controllers playing out one game.
pub struct Game {
    state: GameState,
    controllers: [Box<dyn Controller>; 2],
    next_seat: usize,
    turn: u32,
    max_turns: Option<u32>,
}

impl Game {
    /// `controllers[0]` plays `state.players()[0]` and moves first.
    pub fn new(state: GameState, controllers: [Box<dyn Controller>; 2]) -> Self {
        Self {
            state,
            controllers,
            next_seat: 0,
            turn: 1,
            max_turns: None,
        }
    }

    /// Stop with [`Outcome::TurnLimit`] after this many turns.
    #[must_use]
    pub fn with_turn_limit(mut self, max_turns: u32) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Turns taken so far, skipped turns included
    #[inline]
    pub fn turns_played(&self) -> u32 {
        self.turn - 1
    }

    /// Play until someone wins, the game is drawn, or the turn limit hits.
    ///
    /// Progress and the final board are written to `out`.
    #[instrument(skip_all)]
    pub fn play(&mut self, out: &mut impl Write) -> Result<Outcome> {
        info!("Game started");
        if let Some(outcome) = self.verdict(None) {
            return self.finish(outcome, out);
        }

        loop {
            if self.max_turns.is_some_and(|limit| self.turns_played() >= limit) {
                return self.finish(Outcome::TurnLimit, out);
            }
            if let Some(outcome) = self.play_turn(out)? {
                return self.finish(outcome, out);
            }
        }
    }

    /// Play a single turn for the seat whose turn it is.
    pub fn play_turn(&mut self, out: &mut impl Write) -> Result<Option<Outcome>> {
        let seat = self.next_seat;
        let side = if seat == 0 { Side::Max } else { Side::Min };
        let player = self.state.player(side);
        let id = player.id();

        writeln!(out)?;
        write!(out, "{}", BoardView(&self.state))?;
        writeln!(
            out,
            "\n> {} ({}): turn {}, {} token moves left",
            self.controllers[seat].name(),
            player.glyph(),
            self.turn,
            self.state.moves_left()
        )?;

        if !player.has_tokens() && self.state.moves_left() == 0 {
            let skip = MoveError::OutOfMovesAndTokens { player: id };
            info!(player = %id, "Turn skipped");
            writeln!(out, "{skip}; skipping turn")?;
            self.advance();
            return Ok(None);
        }

        let view = match side {
            Side::Max => self.state.clone(),
            Side::Min => self.state.swapped(),
        };

        let controller = &mut self.controllers[seat];
        let action = loop {
            let action = controller.choose(&view)?;
            match self.state.apply_mut(action, side) {
                Ok(()) => break action,
                Err(e) if controller.is_automated() => {
                    return Err(e).with_context(|| {
                        format!("{} played an illegal action {}", controller.name(), action)
                    });
                }
                Err(e) => {
                    warn!(player = %id, %action, error = %e, "Rejected action");
                    writeln!(out, "Invalid action: {e}")?;
                }
            }
        };

        info!(player = %id, action = %format_action(action), turn = self.turn, "Action played");
        writeln!(out, "{} played {}", controller.name(), format_action(action))?;

        let outcome = self.verdict(Some(id));
        self.advance();
        Ok(outcome)
    }

    fn advance(&mut self) {
        self.next_seat = 1 - self.next_seat;
        self.turn += 1;
    }

    /// Winner if any X stands; the mover's own X beats one it completed for
    /// the opponent.
    fn verdict(&self, mover: Option<PlayerId>) -> Option<Outcome> {
        let winners = self.state.winners();
        if let Some(id) = mover.filter(|id| winners.contains(id)) {
            return Some(Outcome::Winner(id));
        }
        if let Some(&id) = winners.iter().next() {
            return Some(Outcome::Winner(id));
        }
        if self.state.board().full() || self.state.is_exhausted() {
            return Some(Outcome::Draw);
        }
        None
    }

    fn finish(&self, outcome: Outcome, out: &mut impl Write) -> Result<Outcome> {
        info!(?outcome, turns = self.turns_played(), "Game over");
        writeln!(out)?;
        match outcome {
            Outcome::Winner(id) => {
                let glyph = self
                    .state
                    .side_of(id)
                    .map_or('?', |side| self.state.player(side).glyph());
                writeln!(out, "{glyph} {glyph}  Player {id} wins!")?;
            }
            Outcome::Draw => {
                writeln!(out, "No tokens to add and no moves left: the game is a draw.")?;
            }
            Outcome::TurnLimit => {
                writeln!(out, "Turn limit reached.")?;
            }
        }
        write!(out, "{}", BoardView(&self.state))?;
        Ok(outcome)
    }
}
