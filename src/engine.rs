//! Engine state management.
//!
//! Holds the game session, engine options, and the RNG behind the XOI
//! protocol front. Each `handle_*` method maps one command onto session
//! operations and writes its reply lines to a generic `Write` sink, so
//! tests can drive the engine against byte buffers. The `go` handler runs
//! whichever strategy the active difficulty tier selects.

use std::collections::HashMap;
use std::io::Write;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::Mark;
use crate::eval::Outcome;
use crate::protocol::notation::{encode_cells, parse_cells, parse_side, NotationError};
use crate::search::Difficulty;
use crate::session::{GameSession, SessionSnapshot};

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    session: GameSession,
    pub options: HashMap<String, String>,
    rng: SmallRng,
}

impl Engine {
    /// Creates a new engine: empty board, human on X, default tier.
    pub fn new() -> Self {
        Engine {
            session: GameSession::new(Difficulty::default()),
            options: HashMap::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Read access to the session, for callers that want state without a
    /// protocol round trip.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Sets an engine option. `Seed` reseeds the RNG immediately (0 means
    /// entropy); other options are read when next used.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        let value = value.unwrap_or_default();
        if name == "Seed" {
            let seed = value.parse::<u64>().unwrap_or(0);
            self.rng = if seed == 0 {
                SmallRng::from_entropy()
            } else {
                SmallRng::seed_from_u64(seed)
            };
        }
        self.options.insert(name, value);
    }

    /// Assigns the mark the engine plays; the human takes the other.
    pub fn set_mark(&mut self, mark: Mark) {
        self.session.set_computer_mark(mark);
    }

    /// Returns the configured difficulty tier from options (default hard).
    fn difficulty(&self) -> Difficulty {
        self.options
            .get("Difficulty")
            .and_then(|v| Difficulty::from_name(v))
            .unwrap_or_default()
    }

    /// Handles the XOI handshake: writes id, options, protocol_version,
    /// and xoiok.
    pub fn handle_xoi<W: Write>(&self, out: &mut W) {
        writeln!(out, "id name gridlock").unwrap();
        writeln!(out, "id author gridlock").unwrap();
        writeln!(
            out,
            "option name Difficulty type combo default hard var easy var medium var hard"
        )
        .unwrap();
        writeln!(out, "option name Seed type spin default 0 min 0 max 4294967295").unwrap();
        writeln!(out, "protocol_version 1").unwrap();
        writeln!(out, "xoiok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) {
        writeln!(out, "readyok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `newgame` command: a fresh board at the given tier, or
    /// at the `Difficulty` option's tier when none is named.
    pub fn handle_newgame<W: Write>(&mut self, difficulty: Option<Difficulty>, out: &mut W) {
        let tier = difficulty.unwrap_or_else(|| self.difficulty());
        let snapshot = self.session.reset(tier);
        write_state(out, &snapshot);
        out.flush().unwrap();
    }

    /// Handles the `position` command: loads the given cells and side to
    /// move, replying with the new state line or an error line.
    pub fn handle_position<W: Write>(&mut self, cells: &str, side: &str, out: &mut W) {
        match self.load_position(cells, side) {
            Ok(snapshot) => write_state(out, &snapshot),
            Err(e) => {
                writeln!(out, "error {}", e).unwrap();
            }
        }
        out.flush().unwrap();
    }

    /// Parses and loads a position from its notation parts.
    fn load_position(&mut self, cells: &str, side: &str) -> Result<SessionSnapshot, NotationError> {
        let board = parse_cells(cells)?;
        let to_move = parse_side(side)?;
        Ok(self.session.load_position(board, to_move))
    }

    /// Handles the `play` command: applies the human side's move, replying
    /// with the new state line, or with an error line the caller should
    /// re-prompt on.
    pub fn handle_play<W: Write>(&mut self, index: usize, out: &mut W) {
        match self.session.submit_human_move(index) {
            Ok(snapshot) => write_state(out, &snapshot),
            Err(e) => {
                writeln!(out, "error {}", e).unwrap();
            }
        }
        out.flush().unwrap();
    }

    /// Handles the `go` command: runs the active tier's strategy for the
    /// engine side and plays its move. Search bookkeeping goes out as an
    /// `info` line when the tier actually searched.
    pub fn handle_go<W: Write>(&mut self, out: &mut W) {
        match self.session.trigger_computer_move(&mut self.rng) {
            Ok((snapshot, result)) => {
                if result.nodes > 0 {
                    writeln!(out, "info nodes {} score {}", result.nodes, result.score).unwrap();
                }
                writeln!(out, "bestmove {}", result.index).unwrap();
                write_state(out, &snapshot);
            }
            Err(e) => {
                writeln!(out, "error {}", e).unwrap();
            }
        }
        out.flush().unwrap();
    }

    /// Handles the `state` command: reports the position without changes.
    pub fn handle_state<W: Write>(&self, out: &mut W) {
        write_state(out, &self.session.snapshot());
        out.flush().unwrap();
    }
}

/// Writes a snapshot as a state line:
/// `state <cells> <side|-> <outcome> [line <a> <b> <c>]`.
fn write_state<W: Write>(out: &mut W, snapshot: &SessionSnapshot) {
    let cells = encode_cells(&snapshot.board);
    let side = match snapshot.to_move {
        Some(mark) => mark.name(),
        None => "-",
    };
    let outcome = outcome_name(snapshot.outcome);
    match snapshot.winning_line {
        Some([a, b, c]) => {
            writeln!(out, "state {} {} {} line {} {} {}", cells, side, outcome, a, b, c).unwrap();
        }
        None => {
            writeln!(out, "state {} {} {}", cells, side, outcome).unwrap();
        }
    }
}

/// Protocol name for an outcome.
fn outcome_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Ongoing => "ongoing",
        Outcome::Win(Mark::X) => "xwins",
        Outcome::Win(_) => "owins",
        Outcome::Draw => "draw",
    }
}
