//! Exhaustive game-tree search, the hard tier.
//!
//! Searches every continuation to the end of the game; the 9-cell board
//! keeps the whole tree small enough that no depth limit, pruning, or
//! position cache is worth its complexity. Scores are taken from the
//! engine side's point of view at every depth, and ties keep the first
//! move in board order, so results are fully deterministic.

use crate::board::{Board, Mark, CELL_COUNT};
use crate::eval::{evaluate, Outcome};
use crate::search::SearchResult;

/// Score for a position the engine side has won.
const WIN_SCORE: i32 = 10;

/// Score for a position the opposing side has won.
const LOSS_SCORE: i32 = -10;

/// Selects the best move for `side` by full minimax search.
///
/// Returns the chosen cell together with its root score and the number of
/// positions visited. Panics if the board is full; the session never asks
/// a strategy to move in a terminal position.
pub fn minimax_move(board: &Board, side: Mark) -> SearchResult {
    let mut nodes = 0u64;
    let mut best_index = None;
    let mut best_score = i32::MIN;

    for index in 0..CELL_COUNT {
        if board.mark_at(index) != Mark::Empty {
            continue;
        }
        let mut child = *board;
        child.place(index, side);
        let score = minimax(&child, side.opponent(), side, &mut nodes);
        if score > best_score {
            best_index = Some(index);
            best_score = score;
        }
    }

    let index = best_index.expect("move requested on a full board");
    SearchResult {
        index,
        score: best_score,
        nodes,
    }
}

/// Scores a position with `to_move` to play, from `engine_side`'s point of
/// view. Recurses on board copies; the caller's board is never touched.
fn minimax(board: &Board, to_move: Mark, engine_side: Mark, nodes: &mut u64) -> i32 {
    *nodes += 1;

    match evaluate(board) {
        Outcome::Win(mark) => {
            return if mark == engine_side {
                WIN_SCORE
            } else {
                LOSS_SCORE
            };
        }
        Outcome::Draw => return 0,
        Outcome::Ongoing => {}
    }

    let maximizing = to_move == engine_side;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in 0..CELL_COUNT {
        if board.mark_at(index) != Mark::Empty {
            continue;
        }
        let mut child = *board;
        child.place(index, to_move);
        let score = minimax(&child, to_move.opponent(), engine_side, nodes);
        if maximizing {
            if score > best {
                best = score;
            }
        } else if score < best {
            best = score;
        }
    }

    best
}
