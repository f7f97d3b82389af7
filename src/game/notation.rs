//! Text notation for cells and actions.
//!
//! A cell is a column letter followed by a row number, `C5` being column 3,
//! row 5. Letters are case-insensitive. One cell means "add a token there";
//! two cells separated by whitespace mean "move the token from the first to
//! the second". Bounds are not checked here; the board reports those.

use derive_more::{Display, Error};

use crate::action::Action;
use crate::board::Pos;

/// Input that does not read as an action.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum NotationError {
    #[display("no input given")]
    Empty,

    #[display("expected one cell to add or two cells to move, got {count}")]
    WrongCellCount { count: usize },

    #[display("{text:?} is not a cell; write a column letter and a row, like C5")]
    BadCell { text: String },
}

/// Parse a single cell such as `c5` or `L10`.
pub fn parse_pos(text: &str) -> Result<Pos, NotationError> {
    let bad = || NotationError::BadCell {
        text: text.to_string(),
    };

    let mut chars = text.chars();
    let column = chars.next().filter(char::is_ascii_alphabetic).ok_or_else(bad)?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    let row: i32 = digits.parse().map_err(|_| bad())?;

    let x = i32::from(column.to_ascii_uppercase() as u8 - b'A') + 1;
    Ok(Pos::new(x, row))
}

/// Parse a full line of input into an action.
pub fn parse_action(line: &str) -> Result<Action, NotationError> {
    let cells: Vec<&str> = line.split_whitespace().collect();
    match cells.as_slice() {
        [] => Err(NotationError::Empty),
        [cell] => Ok(Action::Add(parse_pos(cell)?)),
        [from, to] => Ok(Action::Move {
            from: parse_pos(from)?,
            to: parse_pos(to)?,
        }),
        _ => Err(NotationError::WrongCellCount { count: cells.len() }),
    }
}

/// Cell in board notation; falls back to coordinates past column Z.
pub fn format_pos(pos: Pos) -> String {
    match u8::try_from(pos.x) {
        Ok(x @ 1..=26) => format!("{}{}", char::from(b'A' + x - 1), pos.y),
        _ => pos.to_string(),
    }
}

/// Action in board notation, the same form [`parse_action`] reads.
pub fn format_action(action: Action) -> String {
    match action {
        Action::Add(pos) => format_pos(pos),
        Action::Move { from, to } => format!("{} {}", format_pos(from), format_pos(to)),
    }
}
