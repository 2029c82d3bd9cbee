//! XOI board notation encoding and decoding.
//!
//! A position is a 9-character cell string in row-major order ('X', 'O',
//! or '-' for empty) plus a lowercase side to move, e.g. `X-O-X---- o`.
//! Parsing validates the format only; any well-formed cell string is
//! accepted, including positions no real game could reach, so analysis
//! tooling can load whatever it likes.

use crate::board::{Board, Mark, CELL_COUNT};

/// Errors that can occur while parsing XOI notation.
#[derive(Debug, thiserror::Error)]
pub enum NotationError {
    #[error("expected 9 cells, got {0}")]
    BadLength(usize),

    #[error("invalid cell character: '{0}'")]
    BadCell(char),

    #[error("invalid side: '{0}'")]
    BadSide(String),
}

/// Parses a 9-character cell string into a board.
pub fn parse_cells(s: &str) -> Result<Board, NotationError> {
    let len = s.chars().count();
    if len != CELL_COUNT {
        return Err(NotationError::BadLength(len));
    }

    let mut cells = [Mark::Empty; CELL_COUNT];
    for (i, c) in s.chars().enumerate() {
        cells[i] = Mark::from_xoi_char(c).ok_or(NotationError::BadCell(c))?;
    }
    Ok(Board::from_cells(cells))
}

/// Parses a side name ("x" or "o").
pub fn parse_side(s: &str) -> Result<Mark, NotationError> {
    Mark::from_name(s).ok_or_else(|| NotationError::BadSide(s.to_string()))
}

/// Encodes a board as its 9-character cell string.
pub fn encode_cells(board: &Board) -> String {
    board.cells().iter().map(|m| m.xoi_char()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_board() {
        let board = parse_cells("---------").expect("failed to parse empty board");
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn parse_mixed_position() {
        let board = parse_cells("X-O-X---O").expect("failed to parse");
        assert_eq!(board.mark_at(0), Mark::X);
        assert_eq!(board.mark_at(2), Mark::O);
        assert_eq!(board.mark_at(4), Mark::X);
        assert_eq!(board.mark_at(8), Mark::O);
        assert_eq!(board.empty_cells().len(), 5);
    }

    #[test]
    fn encode_matches_parse() {
        for s in ["---------", "X-O-X---O", "XXXOO-OX-", "XOXOXOXOX"] {
            let board = parse_cells(s).expect("failed to parse");
            assert_eq!(encode_cells(&board), s);
        }
    }

    #[test]
    fn unreachable_positions_still_parse() {
        // Five O against one X could never occur in play; format-level
        // parsing takes it anyway.
        let board = parse_cells("OOOOO---X").expect("failed to parse");
        assert_eq!(board.empty_cells().len(), 3);
    }

    #[test]
    fn error_too_short() {
        let err = parse_cells("X-O").unwrap_err();
        assert!(matches!(err, NotationError::BadLength(3)));
    }

    #[test]
    fn error_too_long() {
        let err = parse_cells("X-O-X---OX").unwrap_err();
        assert!(matches!(err, NotationError::BadLength(10)));
    }

    #[test]
    fn error_bad_cell_character() {
        let err = parse_cells("X-O-x---O").unwrap_err();
        assert!(matches!(err, NotationError::BadCell('x')));
    }

    #[test]
    fn parse_side_accepts_lowercase_only() {
        assert_eq!(parse_side("x").unwrap(), Mark::X);
        assert_eq!(parse_side("o").unwrap(), Mark::O);
        assert!(matches!(parse_side("X").unwrap_err(), NotationError::BadSide(_)));
        assert!(matches!(parse_side("-").unwrap_err(), NotationError::BadSide(_)));
        assert!(matches!(parse_side("").unwrap_err(), NotationError::BadSide(_)));
    }
}
