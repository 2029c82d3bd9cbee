//! Game session state machine.
//!
//! Owns one game: the board, whose turn it is, which side the computer
//! plays, and the active difficulty tier. Human moves are validated and
//! rejected without touching the board; computer moves go through the
//! strategy dispatch. A finished game accepts no moves until reset.
//!
//! Every operation hands back a snapshot so callers never reach into live
//! state, and cross-game concerns (score tallies, pacing) stay outside.

use rand::Rng;
use thiserror::Error;

use crate::board::{Board, Mark, CELL_COUNT};
use crate::eval::{evaluate, winning_line, Outcome};
use crate::search::{select_move, Difficulty, SearchResult};

/// Why a move request was rejected. The session is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cell index {0} out of range")]
    OutOfRange(usize),
    #[error("cell {0} is already occupied")]
    Occupied(usize),
    #[error("not the human side's turn")]
    NotHumanTurn,
    #[error("not the computer side's turn")]
    NotComputerTurn,
    #[error("game is over")]
    Finished,
}

/// Where the session stands in the turn sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingHuman,
    AwaitingComputer,
    GameOver(Outcome),
}

/// Point-in-time view of a session, returned by every operation.
///
/// `to_move` is None once the game has ended; `winning_line` carries the
/// three cells to highlight when the outcome is a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub board: Board,
    pub to_move: Option<Mark>,
    pub outcome: Outcome,
    pub winning_line: Option<[usize; 3]>,
}

/// A single game between the human and the computer.
pub struct GameSession {
    board: Board,
    to_move: Mark,
    phase: SessionPhase,
    difficulty: Difficulty,
    computer: Mark,
}

impl GameSession {
    /// Creates a fresh session: empty board, X to move, computer playing O.
    pub fn new(difficulty: Difficulty) -> GameSession {
        let mut session = GameSession {
            board: Board::empty(),
            to_move: Mark::X,
            phase: SessionPhase::AwaitingHuman,
            difficulty,
            computer: Mark::O,
        };
        session.phase = session.derive_phase();
        session
    }

    /// Clears the board for a new game at the given tier. The computer
    /// keeps its mark; X moves first as always.
    pub fn reset(&mut self, difficulty: Difficulty) -> SessionSnapshot {
        self.board = Board::empty();
        self.to_move = Mark::X;
        self.difficulty = difficulty;
        self.phase = self.derive_phase();
        self.snapshot()
    }

    /// Replaces the position wholesale, for analysis or resumed games.
    /// A terminal position lands directly in the game-over state.
    pub fn load_position(&mut self, board: Board, to_move: Mark) -> SessionSnapshot {
        assert!(to_move != Mark::Empty, "side to move must be X or O");
        self.board = board;
        self.to_move = to_move;
        self.phase = self.derive_phase();
        self.snapshot()
    }

    /// Reassigns which side the computer plays. Takes effect immediately;
    /// with the board unchanged, the waiting state follows the new owner
    /// of the side to move.
    pub fn set_computer_mark(&mut self, mark: Mark) {
        assert!(mark != Mark::Empty, "computer mark must be X or O");
        self.computer = mark;
        self.phase = self.derive_phase();
    }

    /// Applies the human side's move, or reports why it was rejected.
    pub fn submit_human_move(&mut self, index: usize) -> Result<SessionSnapshot, MoveError> {
        match self.phase {
            SessionPhase::AwaitingHuman => {}
            SessionPhase::AwaitingComputer => return Err(MoveError::NotHumanTurn),
            SessionPhase::GameOver(_) => return Err(MoveError::Finished),
        }
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfRange(index));
        }
        if self.board.mark_at(index) != Mark::Empty {
            return Err(MoveError::Occupied(index));
        }

        self.board.place(index, self.to_move);
        self.advance();
        Ok(self.snapshot())
    }

    /// Runs the computer side's strategy and applies its move. Returns the
    /// snapshot together with the strategy's search bookkeeping.
    pub fn trigger_computer_move(
        &mut self,
        rng: &mut impl Rng,
    ) -> Result<(SessionSnapshot, SearchResult), MoveError> {
        match self.phase {
            SessionPhase::AwaitingComputer => {}
            SessionPhase::AwaitingHuman => return Err(MoveError::NotComputerTurn),
            SessionPhase::GameOver(_) => return Err(MoveError::Finished),
        }

        let result = select_move(self.difficulty, &self.board, self.computer, rng);
        self.board.place(result.index, self.computer);
        self.advance();
        Ok((self.snapshot(), result))
    }

    /// Returns the current snapshot without changing anything.
    pub fn snapshot(&self) -> SessionSnapshot {
        let to_move = match self.phase {
            SessionPhase::GameOver(_) => None,
            _ => Some(self.to_move),
        };
        SessionSnapshot {
            board: self.board,
            to_move,
            outcome: evaluate(&self.board),
            winning_line: winning_line(&self.board).map(|w| w.cells),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn computer_mark(&self) -> Mark {
        self.computer
    }

    /// Hands the turn to the other side and re-derives the phase.
    fn advance(&mut self) {
        self.to_move = self.to_move.opponent();
        self.phase = self.derive_phase();
    }

    /// Computes the phase from the board and side to move: terminal
    /// positions are game over, otherwise whoever owns the side to move
    /// is awaited.
    fn derive_phase(&self) -> SessionPhase {
        match evaluate(&self.board) {
            Outcome::Ongoing => {
                if self.to_move == self.computer {
                    SessionPhase::AwaitingComputer
                } else {
                    SessionPhase::AwaitingHuman
                }
            }
            outcome => SessionPhase::GameOver(outcome),
        }
    }
}
