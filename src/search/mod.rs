//! Move selection strategies.
//!
//! Three policies behind one dispatch: uniform random (easy), one-ply
//! win-then-block (medium), and exhaustive minimax (hard). All of them
//! answer the same question: which cell should this side take next.

pub mod heuristic;
pub mod minimax;
pub mod random;

pub use heuristic::heuristic_move;
pub use minimax::minimax_move;
pub use random::random_move;

use rand::Rng;
use serde::Serialize;

use crate::board::{Board, Mark};

/// Strength tier of the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// All tiers, weakest first.
pub const ALL_DIFFICULTIES: [Difficulty; 3] =
    [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

impl Difficulty {
    /// Returns the lowercase tier name used in commands and records.
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parses a tier name.
    pub fn from_name(s: &str) -> Option<Difficulty> {
        match s {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Hard
    }
}

/// Outcome of one strategy invocation: the chosen cell plus search
/// bookkeeping. The non-searching tiers report zero nodes, and their score
/// field carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub index: usize,
    pub score: i32,
    pub nodes: u64,
}

/// Selects a move for `side` according to the difficulty tier.
///
/// Panics if the board is full; callers gate on a non-terminal position.
pub fn select_move(
    difficulty: Difficulty,
    board: &Board,
    side: Mark,
    rng: &mut impl Rng,
) -> SearchResult {
    match difficulty {
        Difficulty::Easy => SearchResult {
            index: random_move(board, rng),
            score: 0,
            nodes: 0,
        },
        Difficulty::Medium => SearchResult {
            index: heuristic_move(board, side, rng),
            score: 0,
            nodes: 0,
        },
        Difficulty::Hard => minimax_move(board, side),
    }
}
