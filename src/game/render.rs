//! Text rendering of the board.

use std::fmt;

use crate::board::Pos;
use crate::state::GameState;

/// Board grid with row numbers on the left and column letters underneath.
///
/// The highest row is printed first so that row 1 sits at the bottom, the way
/// the notation counts.
pub struct BoardView<'a>(pub &'a GameState);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        let board = state.board();

        for y in (1..=board.height()).rev() {
            write!(f, "{y:<3} |")?;
            for x in 1..=board.width() {
                let glyph = board
                    .owner(Pos::new(x, y))
                    .and_then(|id| state.players().iter().find(|p| p.id() == id))
                    .map_or(' ', |p| p.glyph());
                write!(f, " {glyph} |")?;
            }
            writeln!(f)?;
        }

        write!(f, "     ")?;
        for x in 0..board.width() {
            let letter = u8::try_from(x)
                .ok()
                .filter(|&x| x < 26)
                .map_or('?', |x| char::from(b'A' + x));
            write!(f, " {letter}  ")?;
        }
        writeln!(f)
    }
}
