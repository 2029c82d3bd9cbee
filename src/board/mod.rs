//! Board representation.
//!
//! Contains the cell marks, the 3x3 grid, and the fixed table of winning
//! lines shared by the evaluator and the strategies.

pub mod grid;
pub mod line;
pub mod mark;

pub use grid::{col, row, Board, CELL_COUNT};
pub use line::{LINES, LINE_COUNT};
pub use mark::Mark;
