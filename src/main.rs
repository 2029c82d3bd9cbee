//! Gridlock -- a tic-tac-toe engine implementing the XOI protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! following the XOI (X-and-O Interface) convention.

use std::io::{self, BufRead};

use gridlock::engine::Engine;
use gridlock::protocol::parser::{parse_command, Command};

/// Runs the main XOI protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Xoi => {
                engine.handle_xoi(&mut out);
            }
            Command::IsReady => {
                engine.handle_isready(&mut out);
            }
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
            }
            Command::NewGame { difficulty } => {
                engine.handle_newgame(difficulty, &mut out);
            }
            Command::Position { cells, side } => {
                engine.handle_position(&cells, &side, &mut out);
            }
            Command::SetMark { mark } => {
                engine.set_mark(mark);
            }
            Command::Play { index } => {
                engine.handle_play(index, &mut out);
            }
            Command::Go => {
                engine.handle_go(&mut out);
            }
            Command::Stop => {
                // Move selection is synchronous; nothing to interrupt
            }
            Command::State => {
                engine.handle_state(&mut out);
            }
            Command::Quit => {
                break;
            }
        }
    }
}
