//! Character sets for drawing puzzle grids.

use crate::syntax::types::Direction;

// ─── CharSet ─────────────────────────────────────────────────────────────────

/// Which character set to draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Unicode,
    Ascii,
}

// ─── BoxChars ────────────────────────────────────────────────────────────────

/// Border, arrow and filler characters for one charset.
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub arrow_right: char,
    pub arrow_left: char,
    pub arrow_down: char,
    pub arrow_up: char,
    /// Filler for a cell no path has reached.
    pub empty: char,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
            arrow_right: '→',
            arrow_left: '←',
            arrow_down: '↓',
            arrow_up: '↑',
            empty: '·',
        }
    }

    pub fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
            arrow_right: '>',
            arrow_left: '<',
            arrow_down: 'v',
            arrow_up: '^',
            empty: '.',
        }
    }

    pub fn for_charset(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => Self::unicode(),
            CharSet::Ascii => Self::ascii(),
        }
    }

    /// Arrow for the move that entered a cell.
    pub fn arrow(&self, dir: Direction) -> char {
        match dir {
            Direction::N => self.arrow_up,
            Direction::S => self.arrow_down,
            Direction::E => self.arrow_right,
            Direction::W => self.arrow_left,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
