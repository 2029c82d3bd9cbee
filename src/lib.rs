//! Gridlock engine library.
//!
//! Exposes the board representation, evaluator, move strategies, game
//! session, and protocol modules for use by integration tests and the
//! binary entry points.

pub mod board;
pub mod engine;
pub mod eval;
pub mod protocol;
pub mod search;
pub mod selfplay;
pub mod session;
