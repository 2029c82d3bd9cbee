//! Cell marks and side identity.
//!
//! A cell holds one of two marks or is empty. X is the first-moving side;
//! the same type doubles as the side-to-move indicator.

use serde::Serialize;

/// The contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    /// Returns the other side. Empty has no opponent and maps to itself.
    pub const fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Returns the cell character used in XOI board notation.
    pub const fn xoi_char(self) -> char {
        match self {
            Mark::Empty => '-',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Parses a cell from its XOI notation character.
    pub fn from_xoi_char(c: char) -> Option<Mark> {
        match c {
            '-' => Some(Mark::Empty),
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        }
    }

    /// Returns the lowercase side name used in commands and state lines.
    /// Empty renders as "-" (the terminal-position side field).
    pub const fn name(self) -> &'static str {
        match self {
            Mark::Empty => "-",
            Mark::X => "x",
            Mark::O => "o",
        }
    }

    /// Parses a side name. Only the two playing sides have names.
    pub fn from_name(s: &str) -> Option<Mark> {
        match s {
            "x" => Some(Mark::X),
            "o" => Some(Mark::O),
            _ => None,
        }
    }
}
