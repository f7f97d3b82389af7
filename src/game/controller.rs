//! Controllers decide actions for one seat of the game.
//!
//! A controller always sees the game from its own seat: the state it is handed
//! has its player at index 0, whichever seat it actually occupies.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{anyhow, Context, Result};
use tracing::{debug, info, instrument};

use crate::action::Action;
use crate::engine::Engine;
use crate::state::GameState;

use super::notation::{format_action, parse_action};

/// Trait for anything that can pick an action for a seat.
pub trait Controller {
    /// Next action for player index 0 of `view`.
    fn choose(&mut self, view: &GameState) -> Result<Action>;

    /// Returns the controller's display name.
    fn name(&self) -> &str;

    /// Automated controllers are not re-prompted after a rejected action;
    /// a rejection aborts the game instead.
    fn is_automated(&self) -> bool {
        false
    }
}

/// Human player typing actions in board notation.
///
/// Input that does not parse is answered with a message and a fresh prompt.
/// Rule violations are caught by the game loop, which asks again.
pub struct ConsoleController<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleController<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Controller for ConsoleController<R, W> {
    fn choose(&mut self, view: &GameState) -> Result<Action> {
        let me = view.max_player();
        loop {
            let left = me.tokens_left();
            write!(
                self.output,
                " | {} ({}), {} token{} left to add\n | add a token at C5: \"C5\", move it up: \"C5 C6\"\n   : ",
                self.name,
                me.glyph(),
                left,
                if left == 1 { "" } else { "s" },
            )?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read player input")?;
            if read == 0 {
                return Err(anyhow!("input closed while waiting for {}", self.name));
            }

            match parse_action(&line) {
                Ok(action) => return Ok(action),
                Err(e) => {
                    debug!(player = %self.name, input = line.trim(), "Unreadable input");
                    writeln!(self.output, "Invalid input: {e}")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Automated player backed by the search engine.
pub struct SearchController {
    name: String,
    engine: Engine,
}

impl SearchController {
    pub fn new(name: impl Into<String>, engine: Engine) -> Self {
        Self {
            name: name.into(),
            engine,
        }
    }

    #[inline]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl Controller for SearchController {
    #[instrument(skip(self, view), fields(player = %self.name, depth = self.engine.depth()))]
    fn choose(&mut self, view: &GameState) -> Result<Action> {
        let result = self
            .engine
            .play_turn(view)
            .with_context(|| format!("{} could not pick an action", self.name))?;
        info!(
            action = %format_action(result.action),
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "Engine moved"
        );
        Ok(result.action)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_automated(&self) -> bool {
        true
    }
}

/// Plays a fixed list of actions in order; errors once the list runs out.
pub struct ScriptedController {
    name: String,
    actions: VecDeque<Action>,
    automated: bool,
}

impl ScriptedController {
    pub fn new(name: impl Into<String>, actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            name: name.into(),
            actions: actions.into_iter().collect(),
            automated: false,
        }
    }

    /// Treat rejections as fatal, like an engine would.
    #[must_use]
    pub fn automated(mut self) -> Self {
        self.automated = true;
        self
    }
}

impl Controller for ScriptedController {
    fn choose(&mut self, _view: &GameState) -> Result<Action> {
        self.actions
            .pop_front()
            .ok_or_else(|| anyhow!("{} has no scripted actions left", self.name))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_automated(&self) -> bool {
        self.automated
    }
}
