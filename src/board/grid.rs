//! The 3x3 board.
//!
//! Nine cells in a fixed array, indexed 0..8 row-major. The board itself
//! never rejects a placement; occupied-cell and turn-order rules live in the
//! game session, and search code only writes to cells it has checked.

use super::mark::Mark;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Returns the row of a cell index.
pub const fn row(index: usize) -> usize {
    index / 3
}

/// Returns the column of a cell index.
pub const fn col(index: usize) -> usize {
    index % 3
}

/// A full board position. Cheap to copy; search passes snapshots by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    /// Returns a board with every cell empty.
    pub const fn empty() -> Board {
        Board {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from an explicit cell array.
    pub const fn from_cells(cells: [Mark; CELL_COUNT]) -> Board {
        Board { cells }
    }

    /// Returns the cell array by value.
    pub const fn cells(&self) -> [Mark; CELL_COUNT] {
        self.cells
    }

    /// Returns the mark at a cell index. Panics if the index is out of range.
    pub fn mark_at(&self, index: usize) -> Mark {
        self.cells[index]
    }

    /// Writes a mark to a cell. The caller has already checked the cell is
    /// empty; the session is the only place that rejects occupied cells.
    pub fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    /// Returns the indices of all empty cells, in board order.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT)
            .filter(|&i| self.cells[i] == Mark::Empty)
            .collect()
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&m| m != Mark::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_nine_empty_cells() {
        let board = Board::empty();
        assert_eq!(board.empty_cells(), (0..CELL_COUNT).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn place_fills_a_cell() {
        let mut board = Board::empty();
        board.place(4, Mark::X);
        assert_eq!(board.mark_at(4), Mark::X);
        assert_eq!(board.empty_cells().len(), 8);
        assert!(!board.empty_cells().contains(&4));
    }

    #[test]
    fn full_board_reports_full() {
        let mut board = Board::empty();
        for i in 0..CELL_COUNT {
            board.place(i, if i % 2 == 0 { Mark::X } else { Mark::O });
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn row_major_mapping() {
        assert_eq!((row(0), col(0)), (0, 0));
        assert_eq!((row(2), col(2)), (0, 2));
        assert_eq!((row(3), col(3)), (1, 0));
        assert_eq!((row(4), col(4)), (1, 1));
        assert_eq!((row(8), col(8)), (2, 2));
    }

    #[test]
    fn copies_are_independent() {
        let mut a = Board::empty();
        let b = a;
        a.place(0, Mark::X);
        assert_eq!(b.mark_at(0), Mark::Empty);
        assert_eq!(a.mark_at(0), Mark::X);
    }
}
