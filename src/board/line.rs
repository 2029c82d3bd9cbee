//! The fixed table of winning lines.
//!
//! Every component that reasons about wins (the evaluator, the one-ply
//! heuristic, tests) scans this table in the same order, so first-match
//! tie-breaks agree everywhere.

/// Number of winning lines on the 3x3 grid.
pub const LINE_COUNT: usize = 8;

/// The 8 winning triples, as cell indices: rows, then columns, then
/// diagonals. The order is part of the contract; it decides which line is
/// reported when more than one matches.
pub const LINES: [[usize; 3]; LINE_COUNT] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];
