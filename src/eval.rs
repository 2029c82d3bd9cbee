//! Win and draw detection.
//!
//! Pure functions over a board snapshot. Both the session and the search
//! call these after every placement; the winning-line variant also feeds
//! the display layer, which highlights the three winning cells.

use crate::board::{Board, Mark, LINES};

/// The result of a position: still in play, won by a side, or drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Win(Mark),
    Draw,
}

impl Outcome {
    /// Returns true once the game has ended.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winning side, if there is one.
    pub const fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

/// A completed line and the side that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

/// Returns the outcome of a position.
///
/// A board with a completed line is a win for that line's side; a full board
/// with no completed line is a draw; anything else is still in play.
pub fn evaluate(board: &Board) -> Outcome {
    match winning_line(board) {
        Some(win) => Outcome::Win(win.mark),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::Ongoing,
    }
}

/// Returns the first completed line in table order, if any.
///
/// Boards built by play can hold at most one completed line per side, but
/// externally supplied positions may complete several; the table order makes
/// the reported line deterministic.
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    for cells in LINES {
        let mark = board.mark_at(cells[0]);
        if mark != Mark::Empty
            && board.mark_at(cells[1]) == mark
            && board.mark_at(cells[2]) == mark
        {
            return Some(WinningLine { mark, cells });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_of(s: &str) -> Board {
        let mut board = Board::empty();
        for (i, c) in s.chars().enumerate() {
            board.place(i, Mark::from_xoi_char(c).unwrap());
        }
        board
    }

    #[test]
    fn empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::empty()), Outcome::Ongoing);
        assert_eq!(winning_line(&Board::empty()), None);
    }

    #[test]
    fn row_win_is_detected() {
        let board = board_of("XXX-OO---");
        assert_eq!(evaluate(&board), Outcome::Win(Mark::X));
        let win = winning_line(&board).unwrap();
        assert_eq!(win.mark, Mark::X);
        assert_eq!(win.cells, [0, 1, 2]);
    }

    #[test]
    fn diagonal_win_is_detected() {
        let board = board_of("O-X-OXX-O");
        assert_eq!(evaluate(&board), Outcome::Win(Mark::O));
        assert_eq!(winning_line(&board).unwrap().cells, [0, 4, 8]);
    }

    #[test]
    fn middle_column_win_for_o() {
        let board = board_of("XOXXO--O-");
        assert_eq!(evaluate(&board), Outcome::Win(Mark::O));
        assert_eq!(winning_line(&board).unwrap().cells, [1, 4, 7]);
    }

    #[test]
    fn anti_diagonal_win_is_detected() {
        let board = board_of("OOX-X-X--");
        assert_eq!(evaluate(&board), Outcome::Win(Mark::X));
        assert_eq!(winning_line(&board).unwrap().cells, [2, 4, 6]);
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let board = board_of("XOXXOOOXX");
        assert!(board.is_full());
        assert_eq!(evaluate(&board), Outcome::Draw);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn partial_board_without_line_is_ongoing() {
        let board = board_of("XO--X---O");
        assert_eq!(evaluate(&board), Outcome::Ongoing);
    }

    #[test]
    fn evaluate_is_idempotent() {
        let board = board_of("XX-OO-X-O");
        assert_eq!(evaluate(&board), evaluate(&board));
    }

    #[test]
    fn double_win_reports_first_line_in_table_order() {
        // Unreachable by play: X completes both the top row and the first
        // column. The top row comes first in the table.
        let mut board = Board::empty();
        for i in [0, 1, 2, 3, 6] {
            board.place(i, Mark::X);
        }
        let win = winning_line(&board).unwrap();
        assert_eq!(win.mark, Mark::X);
        assert_eq!(win.cells, [0, 1, 2]);
        assert_eq!(evaluate(&board), Outcome::Win(Mark::X));
    }

    #[test]
    fn terminal_and_winner_accessors() {
        assert!(!Outcome::Ongoing.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert!(Outcome::Win(Mark::O).is_terminal());
        assert_eq!(Outcome::Win(Mark::O).winner(), Some(Mark::O));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::Ongoing.winner(), None);
    }

    #[test]
    fn every_line_is_a_win_for_its_owner() {
        for cells in LINES {
            let mut board = Board::empty();
            for &i in &cells {
                board.place(i, Mark::O);
            }
            assert_eq!(evaluate(&board), Outcome::Win(Mark::O));
            assert_eq!(winning_line(&board).unwrap().cells, cells);
        }
    }
}
