//! One-ply win-then-block policy, the medium tier.
//!
//! Takes an immediate win when one exists, otherwise blocks the opponent's
//! immediate win, otherwise plays randomly. Line scans use the shared table
//! order, so ties resolve the same way on every run.

use rand::Rng;

use crate::board::{Board, Mark, LINES};
use crate::search::random::random_move;

/// Selects a move for `side` by one-ply lookahead.
///
/// Panics (via the random fallback) if the board is full.
pub fn heuristic_move(board: &Board, side: Mark, rng: &mut impl Rng) -> usize {
    if let Some(index) = completing_cell(board, side) {
        return index;
    }
    if let Some(index) = completing_cell(board, side.opponent()) {
        return index;
    }
    random_move(board, rng)
}

/// Returns the empty cell that would complete a line for `mark`, scanning
/// lines in table order. A qualifying line holds two of `mark` and one
/// empty cell.
fn completing_cell(board: &Board, mark: Mark) -> Option<usize> {
    for cells in LINES {
        let mut own = 0;
        let mut empty = None;
        for &i in &cells {
            match board.mark_at(i) {
                Mark::Empty => empty = Some(i),
                m if m == mark => own += 1,
                _ => {}
            }
        }
        if own == 2 {
            if let Some(index) = empty {
                return Some(index);
            }
        }
    }
    None
}
